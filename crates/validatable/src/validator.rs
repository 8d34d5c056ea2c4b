//! Validators and configured validations
//!
//! A [`Validator`] wraps a [`Template`]: a predicate plus its default name,
//! message and option values, and optionally a set of named child
//! validators. Calling [`Validator::configure`] merges a declaration's
//! options with those defaults and yields ready-to-run
//! [`ConfiguredValidation`]s.
//!
//! # Examples
//!
//! ```
//! use validatable::validator::{Template, Validator};
//! use validatable::error::PredicateError;
//! use serde_json::json;
//!
//! let min = Validator::new(
//!     Template::new(|options, value| {
//!         let text = value
//!             .as_str()
//!             .ok_or_else(|| PredicateError::type_mismatch("string", value))?;
//!         Ok(text.chars().count() as u64 >= options.get_u64("min").unwrap_or(0))
//!     })
//!     .named("min")
//!     .with_message_fn(|o| format!("Must be greater than {}", o.get_u64("min").unwrap_or(0))),
//! );
//!
//! let configured = min.configure(json!(5));
//! let check = &configured[0];
//! assert_eq!(check.test(&json!("hello")), Ok(true));
//! assert_eq!(check.test(&json!("hi")), Ok(false));
//! assert_eq!(check.message(), Some("Must be greater than 5"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;

use crate::error::PredicateError;
use crate::message::MessageTemplate;
use crate::options::{Configuration, MESSAGE_KEY, NAME_KEY, Options, VALUE_KEY, merge_defaults};

/// Signature of a validation predicate.
///
/// The predicate receives the merged options of its configuration and the
/// value under test. `Ok(false)` means the value is invalid; `Err` means the
/// predicate could not evaluate it at all.
pub type Predicate = dyn Fn(&Options, &Value) -> Result<bool, PredicateError> + Send + Sync;

/// Builds the predicate of one configured validation from its merged options.
type Prepare = dyn Fn(&Options) -> Arc<Predicate> + Send + Sync;

/// How a template produces the predicate of a configured validation.
#[derive(Clone)]
enum Check {
    /// The same predicate for every configuration.
    Shared(Arc<Predicate>),
    /// A predicate built once per configuration.
    Prepared(Arc<Prepare>),
}

impl Check {
    fn predicate(&self, options: &Options) -> Arc<Predicate> {
        match self {
            Self::Shared(predicate) => Arc::clone(predicate),
            Self::Prepared(prepare) => prepare(options),
        }
    }
}

/// The result of configuring a validator.
///
/// Simple validators produce exactly one entry; composite validators
/// produce one per configured child, in child declaration order.
pub type Configured = SmallVec<[ConfiguredValidation; 1]>;

// ============================================================================
// TEMPLATE
// ============================================================================

/// A predicate together with its defaults.
#[derive(Clone, Default)]
pub struct Template {
    name: Option<Cow<'static, str>>,
    message: Option<MessageTemplate>,
    check: Option<Check>,
    defaults: Options,
    children: IndexMap<String, Validator>,
}

impl Template {
    /// Creates a template around a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Options, &Value) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Self {
            check: Some(Check::Shared(Arc::new(predicate))),
            ..Self::default()
        }
    }

    /// Creates a template whose predicate reads state derived from the
    /// merged options, such as a compiled pattern.
    ///
    /// `prepare` runs once per configured validation; `predicate` then runs
    /// on every check with the prepared state.
    ///
    /// ```
    /// use validatable::validator::{Template, Validator};
    /// use serde_json::json;
    ///
    /// let prefix = Validator::new(
    ///     Template::prepared(
    ///         |options| options.get_str("prefix").unwrap_or_default().to_lowercase(),
    ///         |prefix: &String, _, value| {
    ///             let text = value.as_str().unwrap_or_default().to_lowercase();
    ///             Ok(text.starts_with(prefix.as_str()))
    ///         },
    ///     )
    ///     .named("prefix"),
    /// );
    ///
    /// let checks = prefix.configure(json!("AB"));
    /// assert_eq!(checks[0].test(&json!("abc")), Ok(true));
    /// ```
    pub fn prepared<S, P, F>(prepare: P, predicate: F) -> Self
    where
        S: Send + Sync + 'static,
        P: Fn(&Options) -> S + Send + Sync + 'static,
        F: Fn(&S, &Options, &Value) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        let prepare = move |options: &Options| -> Arc<Predicate> {
            let state = prepare(options);
            let predicate = Arc::clone(&predicate);
            Arc::new(move |options: &Options, value: &Value| predicate(&state, options, value))
        };

        Self {
            check: Some(Check::Prepared(Arc::new(prepare))),
            ..Self::default()
        }
    }

    /// Creates a template with no predicate of its own.
    ///
    /// Composite templates only fan out to their children; see
    /// [`with_child`](Self::with_child).
    #[must_use]
    pub fn composite() -> Self {
        Self::default()
    }

    /// Sets the canonical option name. A bare-value configuration is
    /// readable under this name as well as under `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the default message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<MessageTemplate>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets a default message computed from the merged options.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Options) -> String + Send + Sync + 'static,
    {
        self.message = Some(MessageTemplate::dynamic(f));
        self
    }

    /// Sets a default option value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key, value);
        self
    }

    /// Declares a child validator, configured when a declaration carries an
    /// entry named `name`. Children run in the order they are declared here.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_child(mut self, name: impl Into<String>, child: impl Into<Validator>) -> Self {
        self.children.insert(name.into(), child.into());
        self
    }

    /// Returns the canonical option name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the default message, if any.
    pub fn message(&self) -> Option<&MessageTemplate> {
        self.message.as_ref()
    }

    /// Returns the default option values.
    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    /// Returns the declared children in declaration order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if the template has a predicate of its own.
    pub fn has_predicate(&self) -> bool {
        self.check.is_some()
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("predicate", &self.check.as_ref().map(|_| "<function>"))
            .field("defaults", &self.defaults)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A reusable, immutable rule factory.
///
/// Cloning is cheap: clones share the same template.
#[derive(Clone, Debug)]
pub struct Validator {
    template: Arc<Template>,
}

impl Validator {
    /// Wraps a template.
    #[must_use]
    pub fn new(template: Template) -> Self {
        Self {
            template: Arc::new(template),
        }
    }

    /// The canonical option name inherited from the template.
    pub fn name(&self) -> Option<&str> {
        self.template.name()
    }

    /// The default message inherited from the template.
    pub fn message(&self) -> Option<&MessageTemplate> {
        self.template.message()
    }

    /// The wrapped template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Returns true if the template declares children.
    pub fn is_composite(&self) -> bool {
        !self.template.children.is_empty()
    }

    /// Configures the rule.
    ///
    /// Explicit options always win over the template's defaults. For a
    /// composite template, every declared child present in the options is
    /// configured with its entry and the results are concatenated in child
    /// declaration order, each child inheriting the composite's `message`
    /// unless it sets its own. Composite options naming neither a child nor
    /// a known option are ignored with a warning, as is a composite without
    /// a predicate of its own that names no child at all.
    pub fn configure(&self, config: impl Into<Configuration>) -> Configured {
        let explicit = config.into().normalize(self.name());

        if self.is_composite() {
            let configured = self.configure_children(&explicit);
            if !configured.is_empty() {
                self.warn_ignored_options(&explicit);
                return configured;
            }
            if !self.template.has_predicate() {
                self.warn_ignored_options(&explicit);
                tracing::warn!(
                    validator = self.name().unwrap_or("<unnamed>"),
                    "composite validator configured without any child; no check was produced"
                );
                return Configured::new();
            }
        }

        let options = merge_defaults(explicit, &self.defaults());
        self.configure_own(options).into_iter().collect()
    }

    /// Name plus template defaults, used to fill absent options.
    fn defaults(&self) -> Options {
        let mut defaults = Options::new();
        if let Some(name) = self.name() {
            defaults.insert(NAME_KEY, name);
        }
        merge_defaults(defaults, &self.template.defaults)
    }

    /// Configures every child named in `explicit`. A string `message` on the
    /// composite is handed to children that do not set their own.
    fn configure_children(&self, explicit: &Options) -> Configured {
        let inherited = explicit.get_str(MESSAGE_KEY);
        let mut configured = Configured::new();

        for (child_name, child) in &self.template.children {
            if let Some(entry) = explicit.get(child_name) {
                let config = match inherited {
                    Some(message) => inherit_message(entry.clone(), message),
                    None => Configuration::from(entry.clone()),
                };
                configured.extend(child.configure(config));
            }
        }

        configured
    }

    fn warn_ignored_options(&self, explicit: &Options) {
        for key in explicit.keys().filter(|key| !self.accepts_option(key)) {
            tracing::warn!(
                validator = self.name().unwrap_or("<unnamed>"),
                option = key,
                "ignoring option that names no child validator"
            );
        }
    }

    fn accepts_option(&self, key: &str) -> bool {
        matches!(key, VALUE_KEY | MESSAGE_KEY | NAME_KEY)
            || self.name() == Some(key)
            || self.template.children.contains_key(key)
            || self.template.defaults.contains(key)
    }

    fn configure_own(&self, mut options: Options) -> Option<ConfiguredValidation> {
        let check = self.template.check.as_ref()?;

        let message = self.resolve_message(&options);
        if let Some(message) = &message {
            options.insert(MESSAGE_KEY, message.clone());
        }
        let predicate = check.predicate(&options);

        tracing::trace!(
            validator = self.name().unwrap_or("<unnamed>"),
            options = options.len(),
            "configured validation"
        );

        Some(ConfiguredValidation {
            name: self.template.name.clone(),
            options,
            message,
            predicate,
        })
    }

    /// An explicit string message wins; `null` falls back to the template.
    fn resolve_message(&self, options: &Options) -> Option<String> {
        match options.get(MESSAGE_KEY) {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Null) | None => self.message().map(|m| m.render(options)),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Adds `message` to a child entry that carries none.
fn inherit_message(entry: Value, message: &str) -> Configuration {
    match entry {
        Value::Object(mut map) => {
            map.entry(MESSAGE_KEY).or_insert_with(|| Value::from(message));
            Configuration::Mapping(map)
        }
        value => Configuration::mapping([(VALUE_KEY, value), (MESSAGE_KEY, message.into())]),
    }
}

impl From<Template> for Validator {
    fn from(template: Template) -> Self {
        Self::new(template)
    }
}

// ============================================================================
// CONFIGURED VALIDATION
// ============================================================================

/// A predicate closed over its resolved options and message.
///
/// Every configured validation owns its options; configuring the same
/// validator twice never shares state between the results.
#[derive(Clone)]
pub struct ConfiguredValidation {
    name: Option<Cow<'static, str>>,
    options: Options,
    message: Option<String>,
    predicate: Arc<Predicate>,
}

impl ConfiguredValidation {
    /// Runs the predicate against a value.
    pub fn test(&self, value: &Value) -> Result<bool, PredicateError> {
        (self.predicate)(&self.options, value)
    }

    /// The rule name inherited from the template.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The resolved message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// All resolved options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Looks up one resolved option.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

impl fmt::Debug for ConfiguredValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredValidation")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn length_of(value: &Value) -> Result<u64, PredicateError> {
        value
            .as_str()
            .map(|s| s.chars().count() as u64)
            .ok_or_else(|| PredicateError::type_mismatch("string", value))
    }

    fn min_validator() -> Validator {
        Template::new(|o, v| Ok(length_of(v)? >= o.get_u64("min").unwrap_or(0)))
            .named("min")
            .with_message_fn(|o| format!("Must be greater than {}", o.get_u64("min").unwrap_or(0)))
            .into()
    }

    fn max_validator() -> Validator {
        Template::new(|o, v| Ok(length_of(v)? <= o.get_u64("max").unwrap_or(u64::MAX)))
            .named("max")
            .with_message_fn(|o| format!("Must be less than {}", o.get_u64("max").unwrap_or(0)))
            .into()
    }

    fn length_validator() -> Validator {
        Template::composite()
            .named("length")
            .with_child("min", min_validator())
            .with_child("max", max_validator())
            .into()
    }

    /// Collects formatted `warn!` output emitted while `f` runs.
    #[derive(Clone, Default)]
    struct Logs(Arc<Mutex<Vec<u8>>>);

    impl Logs {
        fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
            let logs = Self::default();
            let writer = logs.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_max_level(tracing::Level::WARN)
                .finish();

            let result = tracing::subscriber::with_default(subscriber, f);
            let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
            (result, output)
        }
    }

    impl io::Write for Logs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn single(configured: Configured) -> ConfiguredValidation {
        assert_eq!(configured.len(), 1);
        configured.into_iter().next().unwrap()
    }

    #[test]
    fn curries_configured_values_into_predicate() {
        let check = single(min_validator().configure(json!(5)));
        assert_eq!(check.test(&json!("hello")), Ok(true));
        assert_eq!(check.test(&json!("hi")), Ok(false));
    }

    #[test]
    fn configures_the_message() {
        let check = single(min_validator().configure(json!(5)));
        assert_eq!(check.message(), Some("Must be greater than 5"));
        assert_eq!(check.option("message"), Some(&json!("Must be greater than 5")));
    }

    #[test]
    fn configurations_are_independent() {
        let validator = min_validator();
        let five = single(validator.configure(json!(5)));
        let ten = single(validator.configure(json!(10)));

        assert_eq!(five.option("min"), Some(&json!(5)));
        assert_eq!(ten.option("min"), Some(&json!(10)));
        assert_eq!(five.test(&json!("hello")), Ok(true));
        assert_eq!(ten.test(&json!("hello")), Ok(false));
    }

    #[test]
    fn explicit_message_overrides_template() {
        let check = single(
            min_validator().configure(Configuration::mapping([
                ("value", json!(5)),
                ("message", json!("Custom")),
            ])),
        );
        assert_eq!(check.message(), Some("Custom"));
        assert_eq!(check.option("min"), Some(&json!(5)));
    }

    #[test]
    fn null_message_falls_back_to_template() {
        let check = single(
            min_validator()
                .configure(Configuration::mapping([("min", json!(3)), ("message", Value::Null)])),
        );
        assert_eq!(check.message(), Some("Must be greater than 3"));
    }

    #[test]
    fn scalar_shorthand_matches_value_mapping() {
        let validator = min_validator();
        let scalar = single(validator.configure(json!(5)));
        let mapping = single(validator.configure(Configuration::mapping([("value", 5)])));

        assert_eq!(scalar.options(), mapping.options());
        for input in ["", "hi", "hello", "hello world"] {
            assert_eq!(scalar.test(&json!(input)), mapping.test(&json!(input)));
        }
    }

    #[test]
    fn name_is_copied_into_options() {
        let check = single(min_validator().configure(json!(2)));
        assert_eq!(check.options().name(), Some("min"));
        assert_eq!(check.name(), Some("min"));
    }

    #[test]
    fn unnamed_template_keys_scalar_under_value() {
        let validator: Validator = Template::new(|o, v| Ok(o.value() == Some(v))).into();
        let check = single(validator.configure(json!("abc")));

        assert_eq!(check.name(), None);
        assert_eq!(check.message(), None);
        assert_eq!(check.options().keys().collect::<Vec<_>>(), vec!["value"]);
        assert_eq!(check.test(&json!("abc")), Ok(true));
    }

    #[test]
    fn unset_configuration_uses_defaults_only() {
        let validator: Validator = Template::new(|o, v| {
            let ignore = o.get_str("ignore").unwrap_or_default();
            Ok(v.as_str().is_some_and(|s| !s.trim_start_matches(ignore).is_empty()))
        })
        .named("present")
        .with_default("ignore", "$")
        .with_message("is blank")
        .into();

        let check = single(validator.configure(Configuration::Unset));
        assert_eq!(check.option("ignore"), Some(&json!("$")));
        assert_eq!(check.option("present"), None);
        assert_eq!(check.test(&json!("$$")), Ok(false));
        assert_eq!(check.test(&json!("$5")), Ok(true));
    }

    #[test]
    fn explicit_option_beats_template_default() {
        let validator: Validator = Template::new(|_, _| Ok(true))
            .named("numeric")
            .with_default("ignore", "^\\$")
            .into();
        let check = single(validator.configure(Configuration::mapping([("ignore", ",")])));
        assert_eq!(check.option("ignore"), Some(&json!(",")));
    }

    #[test]
    fn composite_follows_declaration_order() {
        let length: Validator = Template::composite()
            .named("length")
            .with_child("min", min_validator())
            .with_child("max", max_validator())
            .into();

        let configured =
            length.configure(Configuration::mapping([("max", json!(10)), ("min", json!(5))]));

        let names: Vec<_> = configured.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec![Some("min"), Some("max")]);
        assert_eq!(configured[0].message(), Some("Must be greater than 5"));
        assert_eq!(configured[1].message(), Some("Must be less than 10"));
    }

    #[test]
    fn composite_configures_only_present_children() {
        let length: Validator = Template::composite()
            .with_child("min", min_validator())
            .with_child("max", max_validator())
            .into();

        let configured = length.configure(Configuration::mapping([("max", 3)]));
        assert_eq!(configured.len(), 1);
        assert_eq!(configured[0].test(&json!("abcd")), Ok(false));
    }

    #[test]
    fn composite_ignores_unknown_keys() {
        let length: Validator = Template::composite()
            .with_child("min", min_validator())
            .into();

        let configured =
            length.configure(Configuration::mapping([("min", json!(1)), ("bogus", json!(2))]));
        assert_eq!(configured.len(), 1);
        assert_eq!(configured[0].option("bogus"), None);
    }

    #[test]
    fn composite_without_children_or_predicate_is_empty() {
        let length: Validator = Template::composite()
            .with_child("min", min_validator())
            .into();
        assert!(length.configure(json!(5)).is_empty());
    }

    #[test]
    fn composite_with_predicate_falls_back_to_itself() {
        let exact: Validator =
            Template::new(|o, v| Ok(length_of(v)? == o.get_u64("size").unwrap_or(0)))
                .named("size")
                .with_child("min", min_validator())
                .into();

        let configured = exact.configure(json!(3));
        assert_eq!(configured.len(), 1);
        assert_eq!(configured[0].test(&json!("abc")), Ok(true));
    }

    #[test]
    fn nested_composites_flatten() {
        let inner: Validator = Template::composite()
            .with_child("min", min_validator())
            .with_child("max", max_validator())
            .into();
        let outer: Validator = Template::composite().with_child("length", inner).into();

        let configured =
            outer.configure(Configuration::mapping([("length", json!({"min": 1, "max": 2}))]));
        assert_eq!(configured.len(), 2);
    }

    #[test]
    fn composite_message_is_inherited_by_children() {
        let length = length_validator();
        let configured = length.configure(Configuration::mapping([
            ("min", json!(5)),
            ("max", json!({"value": 10, "message": "too long"})),
            ("message", json!("wrong length")),
        ]));

        let messages: Vec<_> = configured.iter().map(|c| c.message()).collect();
        assert_eq!(messages, vec![Some("wrong length"), Some("too long")]);
        assert_eq!(configured[0].option("min"), Some(&json!(5)));
    }

    #[test]
    fn composite_warns_once_per_ignored_key() {
        let (configured, logs) = Logs::capture(|| {
            length_validator().configure(Configuration::mapping([
                ("min", json!(1)),
                ("bogus", json!(2)),
                ("maximum", json!(3)),
            ]))
        });

        assert_eq!(configured.len(), 1);
        assert_eq!(logs.lines().filter(|l| l.contains("ignoring option")).count(), 2);
        assert!(logs.contains("bogus"));
        assert!(logs.contains("maximum"));
    }

    #[test]
    fn composite_of_unknown_keys_only_warns() {
        let (configured, logs) = Logs::capture(|| {
            length_validator().configure(Configuration::mapping([("minimum", json!(5))]))
        });

        assert!(configured.is_empty());
        assert_eq!(logs.lines().filter(|l| l.contains("ignoring option")).count(), 1);
        assert!(logs.contains("minimum"));
        assert!(logs.contains("no check was produced"));
    }

    #[test]
    fn composite_scalar_without_predicate_warns() {
        let (configured, logs) = Logs::capture(|| length_validator().configure(json!(5)));

        assert!(configured.is_empty());
        assert!(!logs.contains("ignoring option"));
        assert!(logs.contains("no check was produced"));
    }

    #[test]
    fn matched_composite_does_not_warn() {
        let (configured, logs) = Logs::capture(|| {
            length_validator().configure(Configuration::mapping([
                ("min", json!(1)),
                ("message", json!("bad")),
            ]))
        });

        assert_eq!(configured.len(), 1);
        assert_eq!(logs, "");
    }

    #[test]
    fn prepared_state_is_built_once_per_configuration() {
        let prepared = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&prepared);
        let starts_with: Validator = Template::prepared(
            move |o| {
                counter.fetch_add(1, Ordering::SeqCst);
                o.get_str("prefix").unwrap_or_default().to_owned()
            },
            |prefix: &String, _, v| Ok(v.as_str().is_some_and(|s| s.starts_with(prefix.as_str()))),
        )
        .named("prefix")
        .into();

        let check = single(starts_with.configure(json!("ab")));
        for input in ["abc", "abd", "xyz"] {
            check.test(&json!(input)).unwrap();
        }
        assert_eq!(prepared.load(Ordering::SeqCst), 1);
        assert_eq!(check.test(&json!("xab")), Ok(false));

        let other = single(starts_with.configure(json!("x")));
        assert_eq!(other.test(&json!("xab")), Ok(true));
        assert_eq!(prepared.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn predicate_errors_surface() {
        let check = single(min_validator().configure(json!(1)));
        assert_eq!(
            check.test(&json!(42)),
            Err(PredicateError::type_mismatch("string", &json!(42)))
        );
    }
}
