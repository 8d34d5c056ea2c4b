//! Numericality validator
//!
//! Numbers always pass. Strings pass when they parse as a finite number
//! once every match of the optional `ignore` pattern has been removed.
//! With `integer: true` only whole numbers pass.
//!
//! ```
//! use validatable::validators::numericality;
//! use serde_json::json;
//!
//! let money = numericality().configure(json!({"ignore": "^\\$"}));
//! assert_eq!(money[0].test(&json!("$12.50")), Ok(true));
//! assert_eq!(money[0].test(&json!("twelve")), Ok(false));
//! ```

use std::borrow::Cow;

use regex::Regex;
use serde_json::Value;

use crate::error::PredicateError;
use crate::options::Options;
use crate::validator::{Template, Validator};

/// Compiles the `ignore` option once per configured check.
fn ignore_pattern(options: &Options) -> Result<Option<Regex>, PredicateError> {
    match options.get("ignore") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(pattern)) => Regex::new(pattern)
            .map(Some)
            .map_err(|e| PredicateError::invalid_option("ignore", e)),
        Some(_) => Err(PredicateError::invalid_option(
            "ignore",
            "expected a regular expression",
        )),
    }
}

fn strip_ignored<'a>(ignore: Option<&Regex>, input: &'a str) -> Cow<'a, str> {
    ignore.map_or(Cow::Borrowed(input), |regex| regex.replace_all(input, ""))
}

fn is_whole(n: f64) -> bool {
    n.fract() == 0.0
}

/// The value must be numeric.
#[must_use]
pub fn numericality() -> Validator {
    Template::prepared(ignore_pattern, |ignore, options, value| {
        let integer = options.get_bool("integer").unwrap_or(false);
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let ignore = ignore.as_ref().map_err(Clone::clone)?;
                strip_ignored(ignore.as_ref(), s).trim().parse::<f64>().ok()
            }
            other => return Err(PredicateError::type_mismatch("string or number", other)),
        };
        Ok(number.is_some_and(|n| n.is_finite() && (!integer || is_whole(n))))
    })
    .named("numericality")
    .with_message_fn(|o| {
        if o.get_bool("integer") == Some(true) {
            "must be an integer".to_owned()
        } else {
            "must be a number".to_owned()
        }
    })
    .into()
}
