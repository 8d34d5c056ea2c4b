//! Rule configuration input and the merged option set
//!
//! A rule declaration is either a bare value (`min: 5`) or a mapping
//! (`min: { value: 5, message: "Too short" }`). [`Configuration`] keeps that
//! distinction explicit instead of inspecting values at runtime, and
//! [`Options`] is the immutable, merged result a predicate reads from.
//!
//! # Examples
//!
//! ```
//! use validatable::options::{Configuration, Options, merge_defaults};
//! use serde_json::json;
//!
//! let config = Configuration::from(json!(5));
//! assert!(config.is_scalar());
//!
//! let explicit = Options::from_iter([("value", json!(5))]);
//! let defaults = Options::from_iter([("value", json!(1)), ("ignore", json!("^\\$"))]);
//! let merged = merge_defaults(explicit, &defaults);
//! assert_eq!(merged.value(), Some(&json!(5)));
//! assert_eq!(merged.get_str("ignore"), Some("^\\$"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Generic key carrying a bare-value configuration.
pub const VALUE_KEY: &str = "value";

/// Key carrying an explicit message override.
pub const MESSAGE_KEY: &str = "message";

/// Key carrying the rule name copied from the template.
pub const NAME_KEY: &str = "name";

// ============================================================================
// CONFIGURATION
// ============================================================================

/// How a rule was configured in a declaration.
///
/// The variant is decided by the declaration itself: a JSON object is a
/// [`Mapping`](Configuration::Mapping), every other value is a
/// [`Scalar`](Configuration::Scalar) shorthand for the rule's primary option.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Configuration {
    /// No options at all; only template defaults apply.
    #[default]
    Unset,
    /// Shorthand: the rule's primary option equals this value.
    Scalar(Value),
    /// Named options, possibly including `message` and child rule entries.
    Mapping(Map<String, Value>),
}

impl Configuration {
    /// Creates a scalar configuration.
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }

    /// Creates a mapping configuration from key/value pairs.
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true for the bare-value shorthand.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true for a mapping configuration.
    #[must_use]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Normalizes the configuration into explicit options.
    ///
    /// A scalar becomes `{value: scalar}`. When `name` is given and the
    /// options carry a `value` but no `name` entry, the value is copied under
    /// `name` too, so `min: 5` and `min: {value: 5}` both read as `min = 5`.
    #[must_use]
    pub fn normalize(self, name: Option<&str>) -> Options {
        let mut options = match self {
            Self::Unset => Options::new(),
            Self::Scalar(value) => Options::from_iter([(VALUE_KEY, value)]),
            Self::Mapping(map) => map.into_iter().collect(),
        };

        if let Some(name) = name
            && !options.contains(name)
            && let Some(value) = options.value().cloned()
        {
            options.insert(name, value);
        }

        options
    }
}

impl From<Value> for Configuration {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(map),
            other => Self::Scalar(other),
        }
    }
}

macro_rules! scalar_configuration {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Configuration {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Value::from(value))
                }
            }
        )*
    };
}

scalar_configuration!(bool, i32, i64, u32, u64, usize, f64, &str, String);

impl From<Option<Value>> for Configuration {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Scalar(value) => value.serialize(serializer),
            Self::Mapping(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// An ordered, merged set of rule options.
///
/// This is what a predicate and a dynamic message read from. Accessors
/// return `None` for absent keys and for values of the wrong JSON type;
/// interpreting either is up to the predicate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    entries: IndexMap<String, Value>,
}

impl Options {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up an option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if the option is present (even if `null`).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The generic `value` option.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.get(VALUE_KEY)
    }

    /// The rule name copied in from the template, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME_KEY)
    }

    /// Returns a string option.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns an unsigned integer option.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// Returns a signed integer option.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Returns a floating point option. Integers are widened.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Returns a boolean option.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns a list option.
    #[must_use]
    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// Option names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ============================================================================
// MERGE
// ============================================================================

/// Fills the options absent from `explicit` with the ones from `defaults`.
///
/// Explicit entries are never overwritten, so the result does not depend on
/// the order in which defaults were collected.
#[must_use]
pub fn merge_defaults(mut explicit: Options, defaults: &Options) -> Options {
    for (key, value) in defaults.iter() {
        if !explicit.contains(key) {
            explicit.insert(key, value.clone());
        }
    }
    explicit
}
