//! Length validators
//!
//! Strings are measured in Unicode scalar values, arrays in elements.
//!
//! - `min`: length is at least the option
//! - `max`: length is at most the option
//! - `in`: length is one of the listed values
//! - `length`: composite over `min`, `max` and `in`
//!
//! ```
//! use validatable::validators::length;
//! use serde_json::json;
//!
//! let checks = length().configure(json!({"max": 10, "min": 5}));
//! assert_eq!(checks.len(), 2);
//! assert_eq!(checks[0].name(), Some("min"));
//! assert_eq!(checks[1].test(&json!("far too long, really")), Ok(false));
//! ```

use serde_json::Value;

use crate::error::PredicateError;
use crate::options::Options;
use crate::validator::{Template, Validator};

/// Measures a string (chars) or array (elements).
pub(crate) fn measure(value: &Value) -> Result<u64, PredicateError> {
    match value {
        Value::String(s) => Ok(s.chars().count() as u64),
        Value::Array(items) => Ok(items.len() as u64),
        other => Err(PredicateError::type_mismatch("string or array", other)),
    }
}

fn bound(options: &Options, key: &'static str) -> Result<u64, PredicateError> {
    options
        .get_u64(key)
        .ok_or_else(|| PredicateError::invalid_option(key, "expected a non-negative integer"))
}

fn render_bound(options: &Options, key: &str) -> String {
    options
        .get(key)
        .map_or_else(|| "?".to_owned(), ToString::to_string)
}

/// Length is at least `min`.
#[must_use]
pub fn min() -> Validator {
    Template::new(|options, value| Ok(measure(value)? >= bound(options, "min")?))
        .named("min")
        .with_message_fn(|o| format!("must be at least {} characters", render_bound(o, "min")))
        .into()
}

/// Length is at most `max`.
#[must_use]
pub fn max() -> Validator {
    Template::new(|options, value| Ok(measure(value)? <= bound(options, "max")?))
        .named("max")
        .with_message_fn(|o| format!("must be at most {} characters", render_bound(o, "max")))
        .into()
}

/// Length is one of the values listed in `in`.
#[must_use]
pub fn length_in() -> Validator {
    Template::new(|options, value| {
        let allowed = options
            .get_array("in")
            .ok_or_else(|| PredicateError::invalid_option("in", "expected a list of lengths"))?;
        let length = measure(value)?;
        Ok(allowed.iter().any(|n| n.as_u64() == Some(length)))
    })
    .named("in")
    .with_message("has an invalid length")
    .into()
}

/// Composite of [`min`], [`max`] and [`length_in`], in that order.
#[must_use]
pub fn length() -> Validator {
    Template::composite()
        .named("length")
        .with_child("min", min())
        .with_child("max", max())
        .with_child("in", length_in())
        .into()
}
