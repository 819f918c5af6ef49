//! Parsing of the values given on the command line.
use propnet_core::Interval;
use propnet_core::Value;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum ValueParseError {
    #[error("'{0}' is not a number or an interval 'low..high'")]
    NotANumber(String),
    #[error("the interval '{0}' has its bounds out of order")]
    EmptyInterval(String),
}

/// Parses an integer, a float or an interval written as `low..high`.
pub(crate) fn parse_value(input: &str) -> Result<Value, ValueParseError> {
    let input = input.trim();

    if let Some((low, high)) = input.split_once("..") {
        let (Some(low), Some(high)) = (parse_finite(low), parse_finite(high)) else {
            return Err(ValueParseError::NotANumber(input.to_owned()));
        };

        return Interval::new(low, high)
            .map(Value::from)
            .ok_or_else(|| ValueParseError::EmptyInterval(input.to_owned()));
    }

    if let Ok(integer) = input.parse::<i64>() {
        return Ok(Value::from(integer));
    }

    parse_finite(input)
        .map(Value::from)
        .ok_or_else(|| ValueParseError::NotANumber(input.to_owned()))
}

fn parse_finite(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|float| float.is_finite())
}
