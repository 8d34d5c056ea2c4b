//! Registers a custom rule next to the built-ins, resolves declarations
//! for a blog post and validates two instances.

use serde_json::json;
use tracing::Level;
use validatable::prelude::*;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut registry = ValidatorRegistry::with_builtins();
    registry.register(
        "no_shouting",
        Validator::new(
            Template::new(|_, value| {
                let text = value
                    .as_str()
                    .ok_or_else(|| PredicateError::type_mismatch("string", value))?;
                Ok(text.chars().any(char::is_lowercase) || text.is_empty())
            })
            .named("no_shouting")
            .with_message("must not be all caps"),
        ),
    )?;

    let declarations = Declarations::from_value(json!({
        "title": {
            "required": true,
            "length": { "min": 5, "max": 40 },
            "no_shouting": true
        },
        "price": {
            "numericality": { "ignore": "^\\$", "message": "is not a price" }
        }
    }))?;
    let validations = ValidationSet::resolve(&registry, &declarations)?;

    for post in [
        json!({"title": "Hello, world", "price": "$10"}),
        json!({"title": "HI", "price": "ten"}),
    ] {
        let report = validations.validate(&post, None)?;
        if report.is_valid() {
            println!("{post}: valid");
            continue;
        }
        for (field, messages) in report.into_messages() {
            println!("{post}: {field} {}", messages.join(", "));
        }
    }

    Ok(())
}
