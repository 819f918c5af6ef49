use std::fmt::Display;

use super::Interval;

/// The content of a cell.
///
/// The absence of information ("nothing") is not a value; it is represented by `None` wherever an
/// `Option<Value>` is accepted.
///
/// Equality is total: floats compare numerically, so `0.0` equals `-0.0`, and NaN equals NaN. A
/// value therefore always equals itself and re-adding the content of a cell is never mistaken for
/// new information.
#[derive(Clone, Debug)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Interval(Interval),
}

impl Value {
    /// The numeric interpretation of an integer or float value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(integer) => Some(*integer as f64),
            Value::Float(float) => Some(*float),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    pub fn as_interval(&self) -> Option<Interval> {
        match self {
            Value::Interval(interval) => Some(*interval),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(lhs), Value::Boolean(rhs)) => lhs == rhs,
            (Value::Integer(lhs), Value::Integer(rhs)) => lhs == rhs,
            (Value::Float(lhs), Value::Float(rhs)) => {
                lhs == rhs || (lhs.is_nan() && rhs.is_nan())
            }
            (Value::Text(lhs), Value::Text(rhs)) => lhs == rhs,
            (Value::Interval(lhs), Value::Interval(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(boolean) => write!(f, "{boolean}"),
            Value::Integer(integer) => write!(f, "{integer}"),
            Value::Float(float) => write!(f, "{float}"),
            Value::Text(text) => write!(f, "{text:?}"),
            Value::Interval(interval) => write!(f, "{interval}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Interval> for Value {
    fn from(value: Interval) -> Self {
        Value::Interval(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn floats_are_equal_to_themselves() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Float(0.5), Value::from(0.5));
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_ne!(Value::from(0.0), Value::from(f64::NAN));
    }

    #[test]
    fn integers_and_floats_are_distinct_values() {
        assert_ne!(Value::Integer(1), Value::Float(1.0));
        assert_eq!(Value::Integer(1).as_number(), Value::Float(1.0).as_number());
    }

    #[test]
    fn text_is_displayed_quoted() {
        assert_eq!(Value::from("hello").to_string(), "\"hello\"");
        assert_eq!(Value::from(7).to_string(), "7");
    }
}
