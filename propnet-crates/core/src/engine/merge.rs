//! The `merge` operator which combines the content of a cell with incoming content.
use crate::basic_types::Interval;
use crate::basic_types::NetworkError;
use crate::basic_types::OperationError;
use crate::basic_types::OperationResult;
use crate::basic_types::Value;
use crate::generic_operators::predicates::is_interval;
use crate::generic_operators::predicates::is_number;
use crate::generic_operators::OperatorRegistry;

/// The name under which the merge operator is registered. It takes the current content of a
/// cell and the incoming content, in that order.
pub const MERGE_OPERATOR: &str = "merge";

/// Registers the merge operator, replacing any operator with the same name.
///
/// Equal values merge to themselves and anything else is a contradiction. With `interval_merge`,
/// intervals are merged by intersection and a number is merged with an interval by checking that
/// the interval contains it.
pub(crate) fn install_merge(
    registry: &mut OperatorRegistry,
    interval_merge: bool,
) -> Result<(), NetworkError> {
    let _ = registry.make_generic_operator(2, MERGE_OPERATOR, merge_equal)?;

    if interval_merge {
        registry.assign_operation(MERGE_OPERATOR, merge_intervals, &[is_interval, is_interval])?;
        registry.assign_operation_for_each(
            MERGE_OPERATOR,
            merge_number_with_interval,
            &[&[is_number, is_interval], &[is_interval, is_number]],
        )?;
    }

    Ok(())
}

fn merge_equal(arguments: &[Value]) -> OperationResult {
    if arguments[0] == arguments[1] {
        Ok(arguments[0].clone())
    } else {
        Err(OperationError::Contradiction)
    }
}

fn merge_intervals(arguments: &[Value]) -> OperationResult {
    let (Some(current), Some(incoming)) = (arguments[0].as_interval(), arguments[1].as_interval())
    else {
        return Err(OperationError::Contradiction);
    };

    current
        .intersect(&incoming)
        .map(Value::Interval)
        .ok_or(OperationError::Contradiction)
}

/// A number is more informative than any interval which contains it.
fn merge_number_with_interval(arguments: &[Value]) -> OperationResult {
    let (number, interval): (&Value, Interval) = match (&arguments[0], &arguments[1]) {
        (Value::Interval(interval), number) | (number, Value::Interval(interval)) => {
            (number, *interval)
        }
        _ => return Err(OperationError::Contradiction),
    };

    match number.as_number() {
        Some(value) if interval.contains(value) => Ok(number.clone()),
        _ => Err(OperationError::Contradiction),
    }
}
