//! Host model contract
//!
//! A model type owns (usually statically) the [`ValidationSet`] resolved
//! from its declarations and exposes its fields through [`FieldSource`].
//! Implementing [`Validatable`] then gives it `validate` and `is_valid`.
//!
//! ```
//! # #[cfg(feature = "builtins")] {
//! use std::sync::LazyLock;
//!
//! use serde_json::{Value, json};
//! use validatable::foundation::FieldSource;
//! use validatable::model::Validatable;
//! use validatable::registry::ValidatorRegistry;
//! use validatable::resolver::{Declarations, ValidationSet};
//!
//! static POST: LazyLock<ValidationSet> = LazyLock::new(|| {
//!     let declarations = Declarations::new().rule("title", "required", true);
//!     ValidationSet::resolve(&ValidatorRegistry::with_builtins(), &declarations)
//!         .expect("post declarations resolve")
//! });
//!
//! struct Post(Value);
//!
//! impl FieldSource for Post {
//!     fn field(&self, name: &str) -> Option<&Value> {
//!         self.0.field(name)
//!     }
//! }
//!
//! impl Validatable for Post {
//!     fn validations(&self) -> &ValidationSet {
//!         &POST
//!     }
//! }
//!
//! let post = Post(json!({"title": ""}));
//! assert_eq!(post.validate(None)?.messages("title"), ["is required"]);
//! # }
//! # Ok::<(), validatable::error::Error>(())
//! ```

use crate::error::Result;
use crate::foundation::FieldSource;
use crate::resolver::{ValidationReport, ValidationSet};

/// A model whose fields are checked against a validation set.
pub trait Validatable: FieldSource {
    /// The checks declared for this model.
    fn validations(&self) -> &ValidationSet;

    /// Runs the checks of one field, or of all fields.
    ///
    /// # Errors
    ///
    /// Propagates predicate failures; see [`ValidationSet::validate`].
    fn validate(&self, field: Option<&str>) -> Result<ValidationReport> {
        self.validations().validate(self, field)
    }

    /// Returns true if every check passes.
    ///
    /// # Errors
    ///
    /// Propagates predicate failures; see [`ValidationSet::validate`].
    fn is_valid(&self) -> Result<bool> {
        Ok(self.validate(None)?.is_valid())
    }
}
