//! Format validator
//!
//! The value must be a string matching the `format` regular expression
//! (also accepted under `with`). Anchors are the pattern's business.

use regex::Regex;

use crate::error::PredicateError;
use crate::options::Options;
use crate::validator::{Template, Validator};

/// Compiles the pattern once per configured check.
fn pattern(options: &Options) -> Result<Regex, PredicateError> {
    let source = options
        .get_str("format")
        .or_else(|| options.get_str("with"))
        .ok_or_else(|| PredicateError::invalid_option("format", "expected a regular expression"))?;
    Regex::new(source).map_err(|e| PredicateError::invalid_option("format", e))
}

/// The value must match a regular expression.
#[must_use]
pub fn format() -> Validator {
    Template::prepared(pattern, |regex, _, value| {
        let regex = regex.as_ref().map_err(Clone::clone)?;
        let text = value
            .as_str()
            .ok_or_else(|| PredicateError::type_mismatch("string", value))?;
        Ok(regex.is_match(text))
    })
    .named("format")
    .with_message("is improperly formatted")
    .into()
}
