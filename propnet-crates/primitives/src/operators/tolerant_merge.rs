use propnet_core::OperationError;
use propnet_core::OperationResult;
use propnet_core::Value;

/// The largest relative difference between two numbers which are merged as equal.
pub const MERGE_TOLERANCE: f64 = 1e-9;

/// Merges two numbers, of which the first is the current content of a cell. Integers have to be
/// equal; as soon as a float is involved the numbers only have to agree up to
/// [`MERGE_TOLERANCE`]. The current content is kept.
pub(super) fn merge_numbers(arguments: &[Value]) -> OperationResult {
    let current = &arguments[0];
    let incoming = &arguments[1];
    if current == incoming {
        return Ok(current.clone());
    }

    let agree = match (current, incoming) {
        (Value::Integer(lhs), Value::Integer(rhs)) => lhs == rhs,
        _ => match (current.as_number(), incoming.as_number()) {
            (Some(lhs), Some(rhs)) => approximately_equal(lhs, rhs),
            _ => false,
        },
    };

    if agree {
        Ok(current.clone())
    } else {
        Err(OperationError::Contradiction)
    }
}

fn approximately_equal(lhs: f64, rhs: f64) -> bool {
    if lhs == rhs {
        return true;
    }

    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= MERGE_TOLERANCE * scale
}
