//! # validatable
//!
//! Declarative, composable validation rules for data-model fields.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "builtins")] {
//! use validatable::prelude::*;
//! use serde_json::json;
//!
//! let registry = ValidatorRegistry::with_builtins();
//! let declarations = Declarations::from_value(json!({
//!     "title": { "required": true, "length": { "min": 5, "max": 10 } },
//!     "price": { "numericality": { "ignore": "^\\$" } }
//! }))?;
//!
//! let validations = ValidationSet::resolve(&registry, &declarations)?;
//! let report = validations.validate(&json!({"title": "hi", "price": "$3"}), None)?;
//!
//! assert_eq!(report.messages("title"), ["must be at least 5 characters"]);
//! assert!(report.messages("price").is_empty());
//! # }
//! # Ok::<(), validatable::error::Error>(())
//! ```
//!
//! ## Writing Validators
//!
//! A [`Validator`](validator::Validator) wraps a [`Template`](validator::Template):
//! a predicate over the merged options and the value, plus a default name,
//! message and option values. [`configure`](validator::Validator::configure)
//! turns a declaration's options into ready-to-run checks:
//!
//! ```rust
//! use validatable::prelude::*;
//! use serde_json::json;
//!
//! let min = Validator::new(
//!     Template::new(|options, value| {
//!         let text = value
//!             .as_str()
//!             .ok_or_else(|| PredicateError::type_mismatch("string", value))?;
//!         Ok(text.len() as u64 >= options.get_u64("min").unwrap_or(0))
//!     })
//!     .named("min")
//!     .with_message_fn(|o| format!("Must be greater than {}", o.get_u64("min").unwrap_or(0))),
//! );
//!
//! let checks = min.configure(json!(5));
//! assert_eq!(checks[0].test(&json!("hello")), Ok(true));
//! assert_eq!(checks[0].message(), Some("Must be greater than 5"));
//! ```
//!
//! Templates may declare child validators; configuring such a composite
//! fans out to every child named in the options, in declaration order.

pub mod error;
pub mod foundation;
pub mod message;
pub mod model;
pub mod options;
pub mod prelude;
pub mod registry;
pub mod resolver;
pub mod validator;
#[cfg(feature = "builtins")]
pub mod validators;
