//! Error message templates
//!
//! A template carries either a fixed message or a function of the merged
//! options. Dynamic messages are rendered once, when a rule is configured,
//! never when a value is checked.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::options::Options;

/// Signature of a dynamic message.
pub type MessageFn = dyn Fn(&Options) -> String + Send + Sync;

/// A rule's default error message.
///
/// # Examples
///
/// ```
/// use validatable::message::MessageTemplate;
/// use validatable::options::Options;
///
/// let template = MessageTemplate::dynamic(|options| {
///     format!("Must be greater than {}", options.get_u64("min").unwrap_or_default())
/// });
/// let options = Options::new().with("min", 5);
/// assert_eq!(template.render(&options), "Must be greater than 5");
/// ```
#[derive(Clone)]
pub enum MessageTemplate {
    /// A fixed message.
    Static(Cow<'static, str>),
    /// A message computed from the merged options.
    Dynamic(Arc<MessageFn>),
}

impl MessageTemplate {
    /// Creates a fixed message.
    pub fn fixed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Static(message.into())
    }

    /// Creates a message computed from the merged options.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Options) -> String + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// Renders the message against the merged options.
    #[must_use]
    pub fn render(&self, options: &Options) -> String {
        match self {
            Self::Static(message) => message.clone().into_owned(),
            Self::Dynamic(f) => f(options),
        }
    }

    /// Returns true for a dynamic message.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

impl fmt::Debug for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(message) => f.debug_tuple("Static").field(message).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<function>").finish(),
        }
    }
}

impl From<&'static str> for MessageTemplate {
    fn from(message: &'static str) -> Self {
        Self::fixed(message)
    }
}

impl From<String> for MessageTemplate {
    fn from(message: String) -> Self {
        Self::fixed(message)
    }
}
