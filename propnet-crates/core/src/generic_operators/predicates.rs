//! Predicates on [`Value`]s which are commonly used to select the operation of a
//! [`GenericOperator`].
#[cfg(doc)]
use super::GenericOperator;
use crate::basic_types::Value;

pub fn is_anything(_: &Value) -> bool {
    true
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Integer(_))
}

pub fn is_float(value: &Value) -> bool {
    matches!(value, Value::Float(_))
}

/// Integers and floats.
pub fn is_number(value: &Value) -> bool {
    is_integer(value) || is_float(value)
}

pub fn is_text(value: &Value) -> bool {
    matches!(value, Value::Text(_))
}

pub fn is_interval(value: &Value) -> bool {
    matches!(value, Value::Interval(_))
}
