use itertools::Itertools;
use propnet_core::Interval;
use propnet_core::OperationResult;
use propnet_core::Value;

use super::ArithmeticOperator;

/// The operation of the arithmetic operators when at least one argument is an interval. The
/// result contains every outcome of the operation on numbers taken from the arguments.
pub(super) fn apply(operator: ArithmeticOperator, arguments: &[Value]) -> OperationResult {
    let (Some(lhs), Some(rhs)) = (as_interval(&arguments[0]), as_interval(&arguments[1])) else {
        return Err(operator.unsupported(arguments));
    };

    let result = match operator {
        ArithmeticOperator::Add => Interval::new(lhs.low() + rhs.low(), lhs.high() + rhs.high()),
        ArithmeticOperator::Subtract => {
            Interval::new(lhs.low() - rhs.high(), lhs.high() - rhs.low())
        }
        ArithmeticOperator::Multiply => multiply(lhs, rhs),
        ArithmeticOperator::Divide => {
            if rhs.contains(0.0) {
                return Err(operator.unsupported(arguments));
            }
            Interval::new(1.0 / rhs.high(), 1.0 / rhs.low())
                .and_then(|reciprocal| multiply(lhs, reciprocal))
        }
    };

    // Bounds become NaN when infinite bounds cancel out
    result
        .map(Value::Interval)
        .ok_or_else(|| operator.unsupported(arguments))
}

/// Numbers are treated as the interval containing only that number.
fn as_interval(value: &Value) -> Option<Interval> {
    value
        .as_interval()
        .or_else(|| value.as_number().and_then(Interval::point))
}

fn multiply(lhs: Interval, rhs: Interval) -> Option<Interval> {
    let (low, high) = [
        lhs.low() * rhs.low(),
        lhs.low() * rhs.high(),
        lhs.high() * rhs.low(),
        lhs.high() * rhs.high(),
    ]
    .into_iter()
    .minmax_by(f64::total_cmp)
    .into_option()?;

    Interval::new(low, high)
}

#[cfg(test)]
mod tests {
    use propnet_core::Interval;

    use super::multiply;

    #[test]
    fn product_of_negative_intervals_is_positive() {
        let lhs = Interval::new(-3.0, -1.0).unwrap();
        let rhs = Interval::new(-2.0, -1.0).unwrap();

        assert_eq!(multiply(lhs, rhs), Interval::new(1.0, 6.0));
    }
}
