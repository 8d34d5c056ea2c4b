//! Validation failure records
//!
//! A failed check is described by a [`ValidationError`]: which rule failed,
//! on which field, with which message and which option values. These are
//! results, not operational errors; see [`crate::error`] for those.
//!
//! All string fields use `Cow<'static, str>` so static rule names and
//! messages do not allocate.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::options::Options;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed check.
///
/// # Examples
///
/// ```
/// use validatable::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "must be at least 5 characters")
///     .with_field("title")
///     .with_param("min", "5");
///
/// assert_eq!(error.param("min"), Some("5"));
/// assert_eq!(error.to_string(), "[title] min: must be at least 5 characters (params: [min=5])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the rule that failed, e.g. "min", "required".
    pub code: Cow<'static, str>,

    /// Resolved human-readable message.
    pub message: Cow<'static, str>,

    /// Field the rule was declared on.
    pub field: Option<Cow<'static, str>>,

    /// Option values the rule was configured with, rendered as text.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Records every option as a parameter, skipping the `message` entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: &Options) -> Self {
        for (key, value) in options.iter() {
            if key == crate::options::MESSAGE_KEY {
                continue;
            }
            self.params
                .push((Cow::Owned(key.to_owned()), Cow::Owned(render_param(value))));
        }
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the field name, if set.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

fn render_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of failed checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors recorded for one field, in check order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field() == Some(field))
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_creation() {
        let error = ValidationError::new("required", "is required");
        assert_eq!(error.code, "required");
        assert_eq!(error.message, "is required");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_with_options_skips_message() {
        let options = Options::new()
            .with("min", 5)
            .with("message", "too short")
            .with("name", "min");
        let error = ValidationError::new("min", "too short").with_options(&options);

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("name"), Some("min"));
        assert_eq!(error.param("message"), None);
    }

    #[test]
    fn test_params_render_json() {
        let options = Options::new().with("in", json!([1, 2]));
        let error = ValidationError::new("in", "x").with_options(&options);
        assert_eq!(error.param("in"), Some("[1,2]"));
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidationError::new("required", "is required").with_field("title");
        assert_eq!(error.to_string(), "[title] required: is required");
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add(ValidationError::new("min", "a").with_field("title"));
        errors.add(ValidationError::new("max", "b").with_field("slug"));
        errors.add(ValidationError::new("format", "c").with_field("title"));

        assert_eq!(errors.len(), 3);
        let codes: Vec<_> = errors.for_field("title").map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, vec!["min", "format"]);
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_collection_display() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("required", "is required").with_field("title"));
        assert_eq!(
            errors.to_string(),
            "Validation failed with 1 error(s):\n  1. [title] required: is required\n"
        );
    }

    #[test]
    fn test_empty_collection_is_ok() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
    }
}
