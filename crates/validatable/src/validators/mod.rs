//! Built-in validators
//!
//! Ready-to-register rules covering the common declarations:
//!
//! | name           | checks                                   |
//! |----------------|------------------------------------------|
//! | `required`     | value is present                         |
//! | `min` / `max`  | string or array length bounds            |
//! | `in`           | length is one of a list                  |
//! | `length`       | composite of `min`, `max` and `in`       |
//! | `numericality` | value is numeric                         |
//! | `format`       | string matches a regular expression      |
//! | `inclusion`    | value is one of a list                   |
//!
//! [`ValidatorRegistry::with_builtins`](crate::registry::ValidatorRegistry::with_builtins)
//! registers all of them under these names.

pub mod inclusion;
pub mod length;
pub mod nullable;
pub mod numeric;
pub mod pattern;

pub use inclusion::inclusion;
pub use length::{length, length_in, max, min};
pub use nullable::required;
pub use numeric::numericality;
pub use pattern::format;

use crate::validator::Validator;

/// All built-in validators with their registration names.
#[must_use]
pub fn builtins() -> Vec<(&'static str, Validator)> {
    vec![
        ("required", required()),
        ("min", min()),
        ("max", max()),
        ("in", length_in()),
        ("length", length()),
        ("numericality", numericality()),
        ("format", format()),
        ("inclusion", inclusion()),
    ]
}
