//! Presence validator
//!
//! `required` fails on `null`, on blank strings and on empty arrays or
//! objects. Configuring it with `false` disables the check.

use serde_json::Value;

use crate::validator::{Template, Validator};

/// Returns true if the value counts as present.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// The value must be present.
#[must_use]
pub fn required() -> Validator {
    Template::new(|options, value| {
        if options.get_bool("required") == Some(false) {
            return Ok(true);
        }
        Ok(is_present(value))
    })
    .named("required")
    .with_message("is required")
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(""), false)]
    #[case(json!("   "), false)]
    #[case(json!([]), false)]
    #[case(json!({}), false)]
    #[case(json!("a"), true)]
    #[case(json!(0), true)]
    #[case(json!(false), true)]
    fn required_true(#[case] input: Value, #[case] expected: bool) {
        let checks = required().configure(json!(true));
        assert_eq!(checks[0].test(&input), Ok(expected));
    }

    #[test]
    fn required_false_disables() {
        let checks = required().configure(json!(false));
        assert_eq!(checks[0].test(&json!(null)), Ok(true));
    }

    #[test]
    fn default_message() {
        let checks = required().configure(json!(true));
        assert_eq!(checks[0].message(), Some("is required"));
    }
}
