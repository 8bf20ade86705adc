use gridmin::core::grid::AxisSpec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid axis range '{0}'. Expected 'start:stop:num' (e.g., '-1.5:1.2:200').")]
    InvalidRangeFormat(String),

    #[error("Component '{component}' of axis range '{range}' is not a valid number: '{value}'.")]
    InvalidNumber {
        component: &'static str,
        range: String,
        value: String,
    },

    #[error("Invalid axis range '{range}': {reason}")]
    InvalidAxis { range: String, reason: String },

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),
}

/// Parses `start:stop:num` into an [`AxisSpec`].
pub fn parse_axis_range(s: &str) -> Result<AxisSpec, ParseError> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    let &[start, stop, num] = parts.as_slice() else {
        return Err(ParseError::InvalidRangeFormat(s.to_string()));
    };

    let invalid = |component: &'static str, value: &str| ParseError::InvalidNumber {
        component,
        range: s.to_string(),
        value: value.to_string(),
    };

    let start: f64 = start.parse().map_err(|_| invalid("start", start))?;
    let stop: f64 = stop.parse().map_err(|_| invalid("stop", stop))?;
    let num: usize = num.parse().map_err(|_| invalid("num", num))?;

    AxisSpec::new(start, stop, num).map_err(|e| ParseError::InvalidAxis {
        range: s.to_string(),
        reason: e.to_string(),
    })
}

/// Splits a `KEY=VALUE` override at the first `=`.
pub fn parse_key_value(s: &str) -> Result<(&str, &str), ParseError> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(s.to_string())),
    }
}
