//! Field access on model instances
//!
//! Checks read one field at a time. [`FieldSource`] is the seam between a
//! host model and the validation set: anything that can hand out a field
//! value by name can be validated.

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Types whose fields can be looked up by name for validation.
///
/// # Examples
///
/// ```
/// use validatable::foundation::FieldSource;
/// use serde_json::json;
///
/// let post = json!({"title": "hello"});
/// assert_eq!(post.field("title"), Some(&json!("hello")));
/// assert_eq!(post.field_or_null("slug"), &json!(null));
/// ```
pub trait FieldSource {
    /// Returns the value of a field, or `None` if the field is absent.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Returns the value of a field, treating an absent field as `null`.
    fn field_or_null(&self, name: &str) -> &Value {
        self.field(name).unwrap_or(&NULL)
    }
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl FieldSource for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> FieldSource for IndexMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}
