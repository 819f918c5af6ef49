//! Generic arithmetic operators over numbers and intervals.
mod interval_arithmetic;
mod numeric;
mod tolerant_merge;

use std::fmt::Display;

use log::debug;
use propnet_core::generic_operators::predicates::is_interval;
use propnet_core::generic_operators::predicates::is_number;
use propnet_core::generic_operators::OperatorRegistry;
use propnet_core::NetworkError;
use propnet_core::OperationError;
use propnet_core::Value;
use propnet_core::MERGE_OPERATOR;
pub use tolerant_merge::MERGE_TOLERANCE;

pub const ADD: &str = "add";
pub const SUBTRACT: &str = "subtract";
pub const MULTIPLY: &str = "multiply";
pub const DIVIDE: &str = "divide";

/// The binary arithmetic operations which [`install_arithmetic`] registers as generic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOperator {
    pub const ALL: [ArithmeticOperator; 4] = [
        ArithmeticOperator::Add,
        ArithmeticOperator::Subtract,
        ArithmeticOperator::Multiply,
        ArithmeticOperator::Divide,
    ];

    /// The name under which the operator is registered.
    pub fn name(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => ADD,
            ArithmeticOperator::Subtract => SUBTRACT,
            ArithmeticOperator::Multiply => MULTIPLY,
            ArithmeticOperator::Divide => DIVIDE,
        }
    }

    fn unsupported(self, arguments: &[Value]) -> OperationError {
        OperationError::Unsupported {
            operator: self.name().to_owned(),
            arguments: arguments.to_vec(),
        }
    }
}

impl Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Registers the operators of [`ArithmeticOperator`] in `registry`, replacing operators with the
/// same names, and extends the `merge` operator of the registry to numbers.
///
/// Every arithmetic operator has arity 2:
/// - On two numbers, integers stay integers as long as the result is exact; otherwise the result
///   is a float. Dividing by zero fails with [`OperationError::DivisionByZero`].
/// - If either argument is an interval, a number is treated as the interval containing only that
///   number and the result is the interval of all possible outcomes. Dividing by an interval
///   which contains zero is not supported.
/// - Any other argument fails with [`OperationError::Unsupported`].
///
/// After this, two integers still only merge when they are equal, but a float merges with a
/// number that agrees with it up to [`MERGE_TOLERANCE`]; the cell then keeps its content.
pub fn install_arithmetic(registry: &mut OperatorRegistry) -> Result<(), NetworkError> {
    for operator in ArithmeticOperator::ALL {
        let _ = registry.make_generic_operator(2, operator.name(), move |arguments: &[Value]| {
            numeric::apply(operator, arguments)
        })?;
        registry.assign_operation_for_each(
            operator.name(),
            move |arguments: &[Value]| interval_arithmetic::apply(operator, arguments),
            &[
                &[is_interval, is_interval],
                &[is_number, is_interval],
                &[is_interval, is_number],
            ],
        )?;
    }

    if registry.contains(MERGE_OPERATOR) {
        registry.assign_operation(
            MERGE_OPERATOR,
            tolerant_merge::merge_numbers,
            &[is_number, is_number],
        )?;
    }

    debug!("Installed the arithmetic operators");
    Ok(())
}

#[cfg(test)]
mod tests {
    use propnet_core::generic_operators::OperatorRegistry;
    use propnet_core::Interval;
    use propnet_core::Network;
    use propnet_core::NetworkError;
    use propnet_core::OperationError;
    use propnet_core::OperationResult;
    use propnet_core::Value;

    use super::install_arithmetic;
    use super::ArithmeticOperator;

    fn call(operator: ArithmeticOperator, lhs: Value, rhs: Value) -> OperationResult {
        let mut registry = OperatorRegistry::default();
        install_arithmetic(&mut registry).unwrap();

        registry.operator(operator.name()).unwrap().call(&[lhs, rhs])
    }

    fn interval(low: f64, high: f64) -> Value {
        Value::from(Interval::new(low, high).unwrap())
    }

    #[test]
    fn integers_stay_integers_when_exact() {
        assert_eq!(
            call(ArithmeticOperator::Add, Value::from(3), Value::from(4)),
            Ok(Value::from(7))
        );
        assert_eq!(
            call(ArithmeticOperator::Divide, Value::from(12), Value::from(4)),
            Ok(Value::from(3))
        );
    }

    #[test]
    fn inexact_division_produces_a_float() {
        assert_eq!(
            call(ArithmeticOperator::Divide, Value::from(7), Value::from(2)),
            Ok(Value::from(3.5))
        );
    }

    #[test]
    fn floats_and_integers_mix() {
        assert_eq!(
            call(ArithmeticOperator::Multiply, Value::from(1.5), Value::from(4)),
            Ok(Value::from(6.0))
        );
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(
            call(ArithmeticOperator::Divide, Value::from(1), Value::from(0)),
            Err(OperationError::DivisionByZero)
        );
        assert_eq!(
            call(ArithmeticOperator::Divide, Value::from(1.0), Value::from(0.0)),
            Err(OperationError::DivisionByZero)
        );
    }

    #[test]
    fn non_numbers_are_unsupported() {
        let result = call(ArithmeticOperator::Subtract, Value::from("ten"), Value::from(2));

        assert_eq!(
            result,
            Err(OperationError::Unsupported {
                operator: "subtract".to_owned(),
                arguments: vec![Value::from("ten"), Value::from(2)],
            })
        );
    }

    #[test]
    fn intervals_use_interval_arithmetic() {
        assert_eq!(
            call(
                ArithmeticOperator::Add,
                interval(1.0, 2.0),
                interval(10.0, 20.0)
            ),
            Ok(interval(11.0, 22.0))
        );
        assert_eq!(
            call(ArithmeticOperator::Subtract, interval(1.0, 2.0), Value::from(1)),
            Ok(interval(0.0, 1.0))
        );
        assert_eq!(
            call(
                ArithmeticOperator::Multiply,
                interval(-2.0, 3.0),
                interval(4.0, 5.0)
            ),
            Ok(interval(-10.0, 15.0))
        );
        assert_eq!(
            call(ArithmeticOperator::Divide, Value::from(8), interval(2.0, 4.0)),
            Ok(interval(2.0, 4.0))
        );
    }

    #[test]
    fn division_by_interval_containing_zero_is_unsupported() {
        let result = call(
            ArithmeticOperator::Divide,
            interval(1.0, 2.0),
            interval(-1.0, 1.0),
        );

        assert!(matches!(result, Err(OperationError::Unsupported { .. })));
    }

    #[test]
    fn merge_accepts_numbers_which_agree_up_to_rounding() {
        let mut network = Network::default();
        install_arithmetic(network.operators_mut()).unwrap();
        let cell = network.new_cell_with_content(333);

        network.add_content(cell, Value::from(333.0)).unwrap();
        network.add_content(cell, Value::from(333.000_000_000_001)).unwrap();

        assert_eq!(network.content(cell), Some(&Value::from(333)));
        assert!(network.add_content(cell, Value::from(334.0)).is_err());
    }

    #[test]
    fn merge_accepts_the_content_of_the_cell_again() {
        let mut network = Network::default();
        install_arithmetic(network.operators_mut()).unwrap();
        let not_a_number = network.new_cell_with_content(f64::NAN);
        let zero = network.new_cell_with_content(0.0);

        network.add_content(not_a_number, Value::from(f64::NAN)).unwrap();
        network.add_content(zero, Value::from(-0.0)).unwrap();

        assert_eq!(network.content(not_a_number), Some(&Value::from(f64::NAN)));
        assert_eq!(network.statistics().num_content_changes, 0);
        assert!(network.add_content(not_a_number, Value::from(1.0)).is_err());
    }

    #[test]
    fn merge_keeps_integers_exact() {
        let mut network = Network::default();
        install_arithmetic(network.operators_mut()).unwrap();
        let cell = network.new_cell_with_content(1_000_000_000_000_i64);

        let result = network.add_content(cell, Value::from(1_000_000_000_001_i64));

        assert!(matches!(result, Err(NetworkError::Contradiction { .. })));
    }
}
