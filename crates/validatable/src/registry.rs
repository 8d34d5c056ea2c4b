//! Validator registry
//!
//! Declarations refer to rules by name; the registry is where those names
//! are looked up. Registration happens once, up front, and the registry is
//! read-only while declarations are being resolved.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::validator::Validator;

/// Name to validator map queried by the resolver.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "builtins")] {
/// use validatable::registry::ValidatorRegistry;
/// use validatable::validator::{Template, Validator};
///
/// let mut registry = ValidatorRegistry::with_builtins();
/// registry
///     .register("even", Validator::new(Template::new(|_, v| {
///         Ok(v.as_u64().is_some_and(|n| n % 2 == 0))
///     })))
///     .unwrap();
///
/// assert!(registry.contains("even"));
/// assert!(registry.contains("length"));
/// assert!(registry.register("even", validatable::validators::required()).is_err());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: IndexMap<String, Validator>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in validator.
    #[cfg(feature = "builtins")]
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, validator) in crate::validators::builtins() {
            registry.replace(name, validator);
        }
        debug!(count = registry.len(), "registered built-in validators");
        registry
    }

    /// Registers a validator under a new name.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateValidator`] if the name is taken.
    pub fn register(&mut self, name: impl Into<String>, validator: Validator) -> Result<()> {
        let name = name.into();
        if self.validators.contains_key(&name) {
            return Err(Error::DuplicateValidator(name));
        }
        debug!(validator = %name, composite = validator.is_composite(), "registering validator");
        self.validators.insert(name, validator);
        Ok(())
    }

    /// Registers a validator, replacing any previous one with the same name.
    pub fn replace(&mut self, name: impl Into<String>, validator: Validator) -> Option<Validator> {
        let name = name.into();
        debug!(validator = %name, "registering validator (replace)");
        self.validators.insert(name, validator)
    }

    /// Looks up a validator.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.validators.get(name)
    }

    /// Returns true if a validator is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }

    /// Number of registered validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Validator)> for ValidatorRegistry {
    fn from_iter<I: IntoIterator<Item = (K, Validator)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, validator) in iter {
            registry.replace(name, validator);
        }
        registry
    }
}
