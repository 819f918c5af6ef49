use propnet_core::OperationError;
use propnet_core::OperationResult;
use propnet_core::Value;

use super::ArithmeticOperator;

/// The default operation of the arithmetic operators: arithmetic on two numbers.
pub(super) fn apply(operator: ArithmeticOperator, arguments: &[Value]) -> OperationResult {
    match (&arguments[0], &arguments[1]) {
        (Value::Integer(lhs), Value::Integer(rhs)) => apply_to_integers(operator, *lhs, *rhs),
        (lhs, rhs) => match (lhs.as_number(), rhs.as_number()) {
            (Some(lhs), Some(rhs)) => apply_to_floats(operator, lhs, rhs),
            _ => Err(operator.unsupported(arguments)),
        },
    }
}

fn apply_to_integers(operator: ArithmeticOperator, lhs: i64, rhs: i64) -> OperationResult {
    let exact = match operator {
        ArithmeticOperator::Add => lhs.checked_add(rhs),
        ArithmeticOperator::Subtract => lhs.checked_sub(rhs),
        ArithmeticOperator::Multiply => lhs.checked_mul(rhs),
        ArithmeticOperator::Divide => {
            if rhs == 0 {
                return Err(OperationError::DivisionByZero);
            }
            // `checked_rem` fails for `i64::MIN / -1`, which overflows
            (lhs.checked_rem(rhs) == Some(0)).then(|| lhs / rhs)
        }
    };

    match exact {
        Some(result) => Ok(Value::from(result)),
        None => apply_to_floats(operator, lhs as f64, rhs as f64),
    }
}

fn apply_to_floats(operator: ArithmeticOperator, lhs: f64, rhs: f64) -> OperationResult {
    let result = match operator {
        ArithmeticOperator::Add => lhs + rhs,
        ArithmeticOperator::Subtract => lhs - rhs,
        ArithmeticOperator::Multiply => lhs * rhs,
        ArithmeticOperator::Divide => {
            if rhs == 0.0 {
                return Err(OperationError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    Ok(Value::from(result))
}

#[cfg(test)]
mod tests {
    use propnet_core::Value;

    use super::apply;
    use crate::ArithmeticOperator;

    #[test]
    fn overflowing_integers_fall_back_to_floats() {
        let result = apply(
            ArithmeticOperator::Add,
            &[Value::from(i64::MAX), Value::from(1)],
        );

        assert_eq!(result, Ok(Value::from(i64::MAX as f64 + 1.0)));
    }

    #[test]
    fn dividing_the_smallest_integer_by_minus_one_does_not_overflow() {
        let result = apply(
            ArithmeticOperator::Divide,
            &[Value::from(i64::MIN), Value::from(-1)],
        );

        assert_eq!(result, Ok(Value::from(-(i64::MIN as f64))));
    }
}
