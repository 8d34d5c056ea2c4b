//! Prelude module for convenient imports.
//!
//! `use validatable::prelude::*;` brings in the types needed to write,
//! register, declare and run validators.

pub use crate::error::{Error, PredicateError};
pub use crate::foundation::{FieldSource, ValidationError, ValidationErrors};
pub use crate::message::MessageTemplate;
pub use crate::model::Validatable;
pub use crate::options::{Configuration, Options, merge_defaults};
pub use crate::registry::ValidatorRegistry;
pub use crate::resolver::{Declarations, Validation, ValidationReport, ValidationSet};
pub use crate::validator::{Configured, ConfiguredValidation, Template, Validator};

#[cfg(feature = "builtins")]
pub use crate::validators::{
    format, inclusion, length, length_in, max, min, numericality, required,
};
