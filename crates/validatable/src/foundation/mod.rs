//! Foundation types shared by every part of the crate
//!
//! - **Failures**: [`ValidationError`], [`ValidationErrors`]
//! - **Field access**: [`FieldSource`]

pub mod error;
pub mod fields;

pub use error::{ValidationError, ValidationErrors};
pub use fields::FieldSource;
