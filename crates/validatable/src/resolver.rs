//! Declaration resolution and instance validation
//!
//! Field declarations such as
//!
//! ```json
//! {
//!   "title": { "required": true, "length": { "min": 5, "max": 10 } },
//!   "slug":  { "format": "^[a-z0-9-]+$" }
//! }
//! ```
//!
//! are resolved against a [`ValidatorRegistry`] into a flat, ordered
//! [`ValidationSet`]: one [`Validation`] per configured check, in field
//! order, then rule order, then child order. Running the set against an
//! instance yields a [`ValidationReport`].
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "builtins")] {
//! use validatable::registry::ValidatorRegistry;
//! use validatable::resolver::{Declarations, ValidationSet};
//! use serde_json::json;
//!
//! let registry = ValidatorRegistry::with_builtins();
//! let declarations = Declarations::new()
//!     .rule("title", "required", true)
//!     .rule("title", "length", json!({"min": 5, "max": 10}));
//!
//! let validations = ValidationSet::resolve(&registry, &declarations)?;
//! assert_eq!(validations.len(), 3);
//!
//! let report = validations.validate(&json!({"title": "hi"}), None)?;
//! assert!(!report.is_valid());
//! assert_eq!(report.messages("title"), ["must be at least 5 characters"]);
//! # }
//! # Ok::<(), validatable::error::Error>(())
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::foundation::{FieldSource, ValidationError, ValidationErrors};
use crate::options::Configuration;
use crate::registry::ValidatorRegistry;
use crate::validator::ConfiguredValidation;

/// Message reported by a failing check that has none of its own.
pub const DEFAULT_MESSAGE: &str = "is invalid";

// ============================================================================
// DECLARATIONS
// ============================================================================

/// Ordered `field -> rule -> configuration` declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declarations {
    fields: IndexMap<String, IndexMap<String, Configuration>>,
}

impl Declarations {
    /// Creates empty declarations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares one rule on one field.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(
        mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        config: impl Into<Configuration>,
    ) -> Self {
        self.add(field, rule, config);
        self
    }

    /// Declares one rule on one field, in place. Redeclaring a rule on the
    /// same field replaces its configuration but keeps its position.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        config: impl Into<Configuration>,
    ) {
        self.fields
            .entry(field.into())
            .or_default()
            .insert(rule.into(), config.into());
    }

    /// Parses declarations from a JSON document.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDeclarations`] if the document is not an object of
    /// objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts declarations from a JSON value.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDeclarations`] if the value is not an object of
    /// objects.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Iterates over fields and their rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Configuration>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// One configured check bound to one field.
#[derive(Debug, Clone)]
pub struct Validation {
    field: String,
    rule: String,
    function: ConfiguredValidation,
}

impl Validation {
    /// Binds a configured check to a field.
    pub fn new(
        field: impl Into<String>,
        rule: impl Into<String>,
        function: ConfiguredValidation,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            function,
        }
    }

    /// The field this check reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The rule name used in the declaration.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The configured check.
    pub fn function(&self) -> &ConfiguredValidation {
        &self.function
    }

    /// The message reported when this check fails.
    pub fn message(&self) -> &str {
        self.function.message().unwrap_or(DEFAULT_MESSAGE)
    }

    /// Checks the instance's field. Absent fields are checked as `null`.
    ///
    /// # Errors
    ///
    /// [`Error::Predicate`] if the predicate cannot evaluate the value.
    pub fn check<S: FieldSource + ?Sized>(&self, instance: &S) -> Result<bool> {
        self.function
            .test(instance.field_or_null(&self.field))
            .map_err(|source| Error::Predicate {
                field: self.field.clone(),
                rule: self.code().to_owned(),
                source,
            })
    }

    /// Name of the check: the configured rule's own name, or the declared one.
    fn code(&self) -> &str {
        self.function.name().unwrap_or(&self.rule)
    }

    fn failure(&self) -> ValidationError {
        ValidationError::new(self.code().to_owned(), self.message().to_owned())
            .with_field(self.field.clone())
            .with_options(self.function.options())
    }
}

// ============================================================================
// VALIDATION SET
// ============================================================================

/// The flat, ordered checks of a model.
#[derive(Debug, Clone, Default)]
pub struct ValidationSet {
    validations: Vec<Validation>,
}

impl ValidationSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves declarations against a registry.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownValidator`] for the first rule name the registry does
    /// not know.
    pub fn resolve(registry: &ValidatorRegistry, declarations: &Declarations) -> Result<Self> {
        let mut set = Self::new();
        set.extend_from(registry, declarations)?;
        Ok(set)
    }

    /// Resolves more declarations and appends them.
    ///
    /// Nothing is appended if any rule fails to resolve.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownValidator`] for the first rule name the registry does
    /// not know.
    pub fn extend_from(
        &mut self,
        registry: &ValidatorRegistry,
        declarations: &Declarations,
    ) -> Result<()> {
        let mut resolved = Vec::new();

        for (field, rules) in declarations.iter() {
            for (rule, config) in rules {
                let validator = registry.get(rule).ok_or_else(|| Error::UnknownValidator {
                    field: field.to_owned(),
                    rule: rule.clone(),
                })?;

                resolved.extend(
                    validator
                        .configure(config.clone())
                        .into_iter()
                        .map(|function| Validation::new(field, rule.as_str(), function)),
                );
            }
        }

        debug!(
            fields = declarations.len(),
            validations = resolved.len(),
            "resolved validation declarations"
        );
        self.validations.append(&mut resolved);
        Ok(())
    }

    /// Appends a single validation.
    pub fn push(&mut self, validation: Validation) {
        self.validations.push(validation);
    }

    /// Number of checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validations.len()
    }

    /// Returns true if there are no checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validations.is_empty()
    }

    /// Iterates over all checks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Validation> {
        self.validations.iter()
    }

    /// Checks declared on one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Validation> {
        self.validations.iter().filter(move |v| v.field == field)
    }

    /// Distinct fields with at least one check, in declaration order.
    pub fn fields(&self) -> Vec<&str> {
        self.validations
            .iter()
            .map(|v| v.field.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Runs the checks of one field, or of every field when `field` is
    /// `None`. Every selected check runs; failures on one field do not
    /// stop the others.
    ///
    /// # Errors
    ///
    /// [`Error::Predicate`] as soon as a predicate cannot evaluate its value.
    pub fn validate<S: FieldSource + ?Sized>(
        &self,
        instance: &S,
        field: Option<&str>,
    ) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        let selected = self
            .validations
            .iter()
            .filter(|v| field.is_none_or(|f| v.field == f));

        for validation in selected {
            if !validation.check(instance)? {
                trace!(
                    field = %validation.field,
                    rule = %validation.rule,
                    "validation failed"
                );
                report.record(validation.failure());
            }
        }

        Ok(report)
    }
}

impl<'a> IntoIterator for &'a ValidationSet {
    type Item = &'a Validation;
    type IntoIter = std::slice::Iter<'a, Validation>;

    fn into_iter(self) -> Self::IntoIter {
        self.validations.iter()
    }
}

impl FromIterator<Validation> for ValidationSet {
    fn from_iter<I: IntoIterator<Item = Validation>>(iter: I) -> Self {
        Self {
            validations: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of running a validation set against an instance.
///
/// Only failing fields appear; each lists its messages in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    messages: IndexMap<String, Vec<String>>,
    errors: ValidationErrors,
}

impl ValidationReport {
    fn record(&mut self, error: ValidationError) {
        let field = error.field().unwrap_or_default().to_owned();
        self.messages
            .entry(field)
            .or_default()
            .push(error.message.clone().into_owned());
        self.errors.add(error);
    }

    /// Returns true if every check passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure messages for one field; empty if the field passed.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.messages
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Failing fields in check order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Structured failure records.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the `field -> messages` map.
    #[must_use]
    pub fn into_messages(self) -> IndexMap<String, Vec<String>> {
        self.messages
    }

    /// `Ok(())` if valid, the failure records otherwise.
    ///
    /// # Errors
    ///
    /// The collected [`ValidationErrors`] when any check failed.
    pub fn into_result(self) -> std::result::Result<(), ValidationErrors> {
        self.errors.into_result(())
    }
}
