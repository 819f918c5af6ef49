use std::fmt::Debug;
use std::rc::Rc;

use crate::basic_types::NetworkError;
use crate::basic_types::OperationError;
use crate::basic_types::OperationResult;
use crate::basic_types::Value;
use crate::engine::DebugDyn;
use crate::propnet_assert_eq_simple;

/// A test on a single argument of a [`GenericOperator`].
pub type Predicate = fn(&Value) -> bool;

/// An implementation of a [`GenericOperator`]. It is shared when the same operation is assigned
/// for several predicate lists.
pub type Operation = Rc<dyn Fn(&[Value]) -> OperationResult>;

/// A named operator of fixed arity which dispatches on its arguments.
///
/// See the [module documentation](crate::generic_operators) for the dispatch rules.
pub struct GenericOperator {
    name: String,
    arity: usize,
    default_operation: Operation,
    /// In order of assignment; the first match wins.
    assigned_operations: Vec<AssignedOperation>,
}

struct AssignedOperation {
    predicates: Vec<Predicate>,
    operation: Operation,
}

impl AssignedOperation {
    fn matches(&self, arguments: &[Value]) -> bool {
        self.predicates
            .iter()
            .zip(arguments)
            .all(|(predicate, argument)| predicate(argument))
    }
}

impl GenericOperator {
    /// Creates an operator without assigned operations.
    ///
    /// Fails with [`NetworkError::InvalidArity`] if `arity` is zero.
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        default_operation: impl Fn(&[Value]) -> OperationResult + 'static,
    ) -> Result<GenericOperator, NetworkError> {
        let name = name.into();
        if arity == 0 {
            return Err(NetworkError::InvalidArity {
                operator: name,
                arity,
            });
        }

        Ok(GenericOperator {
            name,
            arity,
            default_operation: Rc::new(default_operation),
            assigned_operations: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The number of operations which have been assigned next to the default operation.
    pub fn num_assigned_operations(&self) -> usize {
        self.assigned_operations.len()
    }

    /// Assigns `operation` to the arguments which are accepted by `predicates`.
    ///
    /// The operation is tried after all operations which were assigned before it. Fails with
    /// [`NetworkError::ArityMismatch`] if the number of predicates differs from the arity.
    pub fn assign(
        &mut self,
        operation: Operation,
        predicates: &[Predicate],
    ) -> Result<(), NetworkError> {
        self.check_predicates(predicates)?;

        self.assigned_operations.push(AssignedOperation {
            predicates: predicates.to_vec(),
            operation,
        });
        propnet_assert_eq_simple!(
            self.assigned_operations
                .last()
                .map(|assigned| assigned.predicates.len()),
            Some(self.arity)
        );

        Ok(())
    }

    pub(crate) fn check_predicates(&self, predicates: &[Predicate]) -> Result<(), NetworkError> {
        if predicates.len() != self.arity {
            return Err(NetworkError::ArityMismatch {
                operator: self.name.clone(),
                expected: self.arity,
                received: predicates.len(),
            });
        }

        Ok(())
    }

    /// Returns the operation which a call with `arguments` would run, without running it.
    pub fn operation_for(&self, arguments: &[Value]) -> Result<&Operation, OperationError> {
        if arguments.len() != self.arity {
            return Err(OperationError::ArityMismatch {
                operator: self.name.clone(),
                expected: self.arity,
                received: arguments.len(),
            });
        }

        let operation = self
            .assigned_operations
            .iter()
            .find(|assigned| assigned.matches(arguments))
            .map(|assigned| &assigned.operation)
            .unwrap_or(&self.default_operation);

        Ok(operation)
    }

    /// Runs the first assigned operation whose predicates accept `arguments`, or the default
    /// operation if there is none.
    pub fn call(&self, arguments: &[Value]) -> OperationResult {
        let operation = self.operation_for(arguments)?;
        operation(arguments)
    }
}

impl Debug for GenericOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericOperator")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("default_operation", &DebugDyn::from("Fn"))
            .field("num_assigned_operations", &self.assigned_operations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::GenericOperator;
    use super::Operation;
    use crate::basic_types::NetworkError;
    use crate::basic_types::OperationError;
    use crate::basic_types::OperationResult;
    use crate::basic_types::Value;
    use crate::generic_operators::predicates::is_anything;
    use crate::generic_operators::predicates::is_integer;
    use crate::generic_operators::predicates::is_number;

    fn constant(value: &'static str) -> Operation {
        Rc::new(move |_: &[Value]| -> OperationResult { Ok(Value::from(value)) })
    }

    #[test]
    fn zero_arity_is_rejected() {
        let result = GenericOperator::new("nullary", 0, |_: &[Value]| Ok(Value::from(0)));

        assert!(matches!(
            result,
            Err(NetworkError::InvalidArity { arity: 0, .. })
        ));
    }

    #[test]
    fn default_is_used_without_matching_assignment() {
        let mut operator =
            GenericOperator::new("describe", 1, |_: &[Value]| Ok(Value::from("default"))).unwrap();
        operator.assign(constant("integer"), &[is_integer]).unwrap();

        assert_eq!(operator.call(&[Value::from("text")]), Ok(Value::from("default")));
        assert_eq!(operator.call(&[Value::from(3)]), Ok(Value::from("integer")));
    }

    #[test]
    fn earliest_assignment_wins() {
        let mut operator =
            GenericOperator::new("describe", 1, |_: &[Value]| Ok(Value::from("default"))).unwrap();
        operator.assign(constant("number"), &[is_number]).unwrap();
        operator.assign(constant("integer"), &[is_integer]).unwrap();
        operator.assign(constant("anything"), &[is_anything]).unwrap();

        assert_eq!(operator.call(&[Value::from(3)]), Ok(Value::from("number")));
        assert_eq!(operator.call(&[Value::from(true)]), Ok(Value::from("anything")));
    }

    #[test]
    fn all_predicates_must_match() {
        let mut operator =
            GenericOperator::new("pair", 2, |_: &[Value]| Ok(Value::from("default"))).unwrap();
        operator
            .assign(constant("numbers"), &[is_number, is_number])
            .unwrap();

        assert_eq!(
            operator.call(&[Value::from(1), Value::from("two")]),
            Ok(Value::from("default"))
        );
        assert_eq!(
            operator.call(&[Value::from(1), Value::from(2.0)]),
            Ok(Value::from("numbers"))
        );
    }

    #[test]
    fn predicate_count_must_equal_arity() {
        let mut operator =
            GenericOperator::new("pair", 2, |_: &[Value]| Ok(Value::from("default"))).unwrap();

        let result = operator.assign(constant("numbers"), &[is_number]);

        assert_eq!(
            result,
            Err(NetworkError::ArityMismatch {
                operator: "pair".to_owned(),
                expected: 2,
                received: 1,
            })
        );
        assert_eq!(operator.num_assigned_operations(), 0);
    }

    #[test]
    fn argument_count_must_equal_arity() {
        let operator =
            GenericOperator::new("pair", 2, |_: &[Value]| Ok(Value::from("default"))).unwrap();

        assert_eq!(
            operator.call(&[Value::from(1)]),
            Err(OperationError::ArityMismatch {
                operator: "pair".to_owned(),
                expected: 2,
                received: 1,
            })
        );
    }
}
