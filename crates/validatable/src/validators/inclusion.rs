//! Inclusion validator
//!
//! The value must equal one of the entries listed under `inclusion`.

use crate::error::PredicateError;
use crate::validator::{Template, Validator};

/// The value must be one of a fixed set.
#[must_use]
pub fn inclusion() -> Validator {
    Template::new(|options, value| {
        let allowed = options.get_array("inclusion").ok_or_else(|| {
            PredicateError::invalid_option("inclusion", "expected a list of values")
        })?;
        Ok(allowed.contains(value))
    })
    .named("inclusion")
    .with_message("is not included in the list")
    .into()
}
