//! Operational errors
//!
//! These are failures of the validation machinery itself: a declaration
//! naming a rule nobody registered, or a predicate that cannot evaluate the
//! value it was handed. A value that simply fails a rule is not an error; it
//! is reported through [`ValidationReport`](crate::resolver::ValidationReport).

use std::borrow::Cow;

// ============================================================================
// PREDICATE ERROR
// ============================================================================

/// Raised by a predicate that cannot evaluate its input.
///
/// Predicates return this instead of `false` when the question itself makes
/// no sense, e.g. measuring the length of a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PredicateError {
    /// The value has a type the predicate does not handle.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: Cow<'static, str>,
        actual: Cow<'static, str>,
    },

    /// An option the predicate depends on is unusable.
    #[error("invalid option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },

    /// Anything else.
    #[error("{0}")]
    Custom(String),
}

impl PredicateError {
    /// Creates a type mismatch error, naming the JSON type of `actual`.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: &serde_json::Value,
    ) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: Cow::Borrowed(json_type_name(actual)),
        }
    }

    /// Creates an invalid option error.
    pub fn invalid_option(option: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a custom error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Returns the JSON type name of a value.
#[must_use]
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ============================================================================
// CRATE ERROR
// ============================================================================

/// Errors raised while registering rules, resolving declarations or
/// running checks.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A declaration names a rule that is not registered.
    #[error("field '{field}' declares unknown validator '{rule}'")]
    UnknownValidator { field: String, rule: String },

    /// A rule name was registered twice.
    #[error("validator '{0}' is already registered")]
    DuplicateValidator(String),

    /// A declaration document could not be parsed.
    #[error("invalid validation declarations: {0}")]
    InvalidDeclarations(#[from] serde_json::Error),

    /// A predicate failed to evaluate a field value.
    #[error("validator '{rule}' failed on field '{field}': {source}")]
    Predicate {
        field: String,
        rule: String,
        #[source]
        source: PredicateError,
    },
}

/// Result alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
