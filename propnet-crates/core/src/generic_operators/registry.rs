use std::rc::Rc;

use log::trace;

use super::GenericOperator;
use super::Operation;
use super::Predicate;
use crate::basic_types::NetworkError;
use crate::basic_types::OperationResult;
use crate::basic_types::Value;
use crate::containers::HashMap;

/// The operators known to a network, by name.
#[derive(Debug, Default)]
pub struct OperatorRegistry {
    operators: HashMap<String, GenericOperator>,
}

impl OperatorRegistry {
    /// Creates the operator `name` with the given arity and default operation and returns it.
    ///
    /// An operator which was registered under the same name before is replaced, including all of
    /// the operations which were assigned to it. Fails with [`NetworkError::InvalidArity`] if
    /// `arity` is zero.
    pub fn make_generic_operator(
        &mut self,
        arity: usize,
        name: impl Into<String>,
        default_operation: impl Fn(&[Value]) -> OperationResult + 'static,
    ) -> Result<&GenericOperator, NetworkError> {
        let operator = GenericOperator::new(name, arity, default_operation)?;
        let name = operator.name().to_owned();

        if self.operators.contains_key(&name) {
            trace!("Replacing generic operator '{name}'");
        }
        let _ = self.operators.insert(name.clone(), operator);

        self.operator(&name)
    }

    /// Assigns `operation` to the operator `name` for the arguments which are accepted by
    /// `predicates`.
    ///
    /// Fails with [`NetworkError::UnknownOperator`] if no operator with this name exists, and with
    /// [`NetworkError::ArityMismatch`] if the number of predicates is not the arity of the
    /// operator.
    pub fn assign_operation(
        &mut self,
        name: &str,
        operation: impl Fn(&[Value]) -> OperationResult + 'static,
        predicates: &[Predicate],
    ) -> Result<(), NetworkError> {
        self.assign_operation_for_each(name, operation, &[predicates])
    }

    /// Assigns the same `operation` to the operator `name` once for every list in
    /// `predicate_lists`, in order.
    ///
    /// This is a shorthand for repeated calls to [`OperatorRegistry::assign_operation`]. All lists
    /// are checked before anything is assigned, so on failure the operator is left unchanged.
    /// An empty `predicate_lists` is reported as an [`NetworkError::ArityMismatch`].
    pub fn assign_operation_for_each(
        &mut self,
        name: &str,
        operation: impl Fn(&[Value]) -> OperationResult + 'static,
        predicate_lists: &[&[Predicate]],
    ) -> Result<(), NetworkError> {
        let operator = self.operator_mut(name)?;

        if predicate_lists.is_empty() {
            return Err(NetworkError::ArityMismatch {
                operator: name.to_owned(),
                expected: operator.arity(),
                received: 0,
            });
        }
        for predicates in predicate_lists {
            operator.check_predicates(predicates)?;
        }

        let operation: Operation = Rc::new(operation);
        for predicates in predicate_lists {
            operator.assign(Rc::clone(&operation), predicates)?;
        }

        Ok(())
    }

    /// Returns whether an operator with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&GenericOperator> {
        self.operators.get(name)
    }

    /// Like [`OperatorRegistry::get`], but reports a missing operator as
    /// [`NetworkError::UnknownOperator`].
    pub fn operator(&self, name: &str) -> Result<&GenericOperator, NetworkError> {
        self.operators
            .get(name)
            .ok_or_else(|| NetworkError::UnknownOperator {
                name: name.to_owned(),
            })
    }

    fn operator_mut(&mut self, name: &str) -> Result<&mut GenericOperator, NetworkError> {
        self.operators
            .get_mut(name)
            .ok_or_else(|| NetworkError::UnknownOperator {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::OperatorRegistry;
    use crate::basic_types::NetworkError;
    use crate::basic_types::OperationError;
    use crate::basic_types::Value;
    use crate::generic_operators::predicates::is_integer;
    use crate::generic_operators::predicates::is_number;
    use crate::generic_operators::predicates::is_text;

    fn registry_with_concat() -> OperatorRegistry {
        let mut registry = OperatorRegistry::default();
        let _ = registry
            .make_generic_operator(2, "concat", |arguments: &[Value]| {
                match (&arguments[0], &arguments[1]) {
                    (Value::Text(lhs), Value::Text(rhs)) => Ok(Value::from(format!("{lhs}{rhs}"))),
                    _ => Err(OperationError::Unsupported {
                        operator: "concat".to_owned(),
                        arguments: arguments.to_vec(),
                    }),
                }
            })
            .unwrap();
        registry
    }

    fn concat_numbers(arguments: &[Value]) -> crate::basic_types::OperationResult {
        Ok(Value::from(format!("{}{}", arguments[0], arguments[1])))
    }

    #[test]
    fn concat_uses_the_default_for_text() {
        let registry = registry_with_concat();

        let result = registry
            .operator("concat")
            .unwrap()
            .call(&[Value::from("hello "), Value::from("world")]);

        assert_eq!(result, Ok(Value::from("hello world")));
    }

    #[test]
    fn concat_uses_the_assigned_operation_for_numbers() {
        let mut registry = registry_with_concat();
        registry
            .assign_operation("concat", concat_numbers, &[is_number, is_number])
            .unwrap();

        let concat = registry.operator("concat").unwrap();

        assert_eq!(
            concat.call(&[Value::from(1), Value::from(2)]),
            Ok(Value::from("12"))
        );
        assert_eq!(
            concat.call(&[Value::from("a"), Value::from("b")]),
            Ok(Value::from("ab"))
        );
    }

    #[test]
    fn assigning_to_an_unknown_operator_fails() {
        let mut registry = OperatorRegistry::default();

        let result = registry.assign_operation("missing", concat_numbers, &[is_number]);

        assert_eq!(
            result,
            Err(NetworkError::UnknownOperator {
                name: "missing".to_owned()
            })
        );
    }

    #[test]
    fn one_operation_for_several_predicate_lists() {
        let mut registry = registry_with_concat();
        registry
            .assign_operation_for_each(
                "concat",
                concat_numbers,
                &[&[is_integer, is_text], &[is_text, is_integer]],
            )
            .unwrap();

        let concat = registry.operator("concat").unwrap();

        assert_eq!(concat.num_assigned_operations(), 2);
        assert_eq!(
            concat.call(&[Value::from(1), Value::from("a")]),
            Ok(Value::from("1\"a\""))
        );
        assert_eq!(
            concat.call(&[Value::from("a"), Value::from(1)]),
            Ok(Value::from("\"a\"1"))
        );
    }

    #[test]
    fn a_bad_predicate_list_assigns_nothing() {
        let mut registry = registry_with_concat();

        let result = registry.assign_operation_for_each(
            "concat",
            concat_numbers,
            &[&[is_integer, is_text], &[is_text]],
        );

        assert!(matches!(
            result,
            Err(NetworkError::ArityMismatch {
                expected: 2,
                received: 1,
                ..
            })
        ));
        assert_eq!(
            registry.operator("concat").unwrap().num_assigned_operations(),
            0
        );
    }

    #[test]
    fn no_predicate_lists_is_an_arity_mismatch() {
        let mut registry = registry_with_concat();

        let result = registry.assign_operation_for_each("concat", concat_numbers, &[]);

        assert_eq!(
            result,
            Err(NetworkError::ArityMismatch {
                operator: "concat".to_owned(),
                expected: 2,
                received: 0,
            })
        );
        assert_eq!(
            registry.operator("concat").unwrap().num_assigned_operations(),
            0
        );
    }

    #[test]
    fn registering_a_name_again_replaces_the_operator() {
        let mut registry = registry_with_concat();
        registry
            .assign_operation("concat", concat_numbers, &[is_number, is_number])
            .unwrap();

        let replaced = registry
            .make_generic_operator(1, "concat", |arguments: &[Value]| Ok(arguments[0].clone()))
            .unwrap();

        assert_eq!(replaced.arity(), 1);
        assert_eq!(replaced.num_assigned_operations(), 0);
    }
}
