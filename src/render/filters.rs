//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::icons::Icon;
use crate::typography::{TextElement, TypeScale, Variant};

/// Registers the page filters on a minijinja environment.
///
/// `typo` routes every text fragment through the type scale; `icon`
/// resolves glyph names to inline SVG. Both fail the render on unknown
/// names: a template referencing a role or glyph that does not exist is a
/// configuration error, caught before any page is written.
pub(crate) fn register_filters(env: &mut Environment<'static>, scale: TypeScale) {
    env.add_filter(
        "typo",
        move |value: String, role: String, class: Option<String>| -> Result<Value, Error> {
            let variant = Variant::from_name(&role).ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!(
                        "unknown text role '{}' (known roles: {})",
                        role,
                        Variant::ALL.map(Variant::name).join(", ")
                    ),
                )
            })?;
            let mut element = TextElement::new(variant).text(value);
            if let Some(class) = class {
                element = element.class(class);
            }
            Ok(Value::from_safe_string(element.render(&scale)))
        },
    );

    env.add_filter("icon", |name: String, class: Option<String>| -> Result<Value, Error> {
        let icon = Icon::from_name(&name).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!(
                    "unknown icon '{}' (known icons: {})",
                    name,
                    Icon::ALL.map(Icon::name).join(", ")
                ),
            )
        })?;
        Ok(Value::from_safe_string(icon.render(class.as_deref().unwrap_or(""))))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::{context, AutoEscape};

    fn env_with_filters() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        register_filters(&mut env, TypeScale::default());
        env
    }

    fn render_one(env: &Environment<'static>, source: &str) -> Result<String, Error> {
        let mut env = env.clone();
        env.add_template_owned("_t".to_string(), source.to_string())?;
        env.get_template("_t")?.render(context! {})
    }

    #[test]
    fn test_typo_filter_renders_role() {
        let env = env_with_filters();
        let html = render_one(&env, r#"{{ "Naqib Hishamuddin." | typo("h3") }}"#).unwrap();
        assert_eq!(
            html,
            "<h3 class=\"scroll-m-20 text-2xl font-semibold tracking-tight\">Naqib Hishamuddin.</h3>"
        );
    }

    #[test]
    fn test_typo_filter_applies_override() {
        let env = env_with_filters();
        let html = render_one(&env, r#"{{ "test" | typo("muted", "text-gray-300") }}"#).unwrap();
        assert!(html.starts_with("<p class=\"text-sm text-gray-300\">"));
    }

    #[test]
    fn test_typo_filter_output_is_not_double_escaped() {
        let env = env_with_filters();
        let html = render_one(&env, r#"{{ "x" | typo("p") }}"#).unwrap();
        assert!(html.starts_with("<p "));
        assert!(!html.contains("&lt;p"));
    }

    #[test]
    fn test_typo_filter_rejects_unknown_role() {
        let env = env_with_filters();
        let err = render_one(&env, r#"{{ "x" | typo("heading-5") }}"#).unwrap_err();
        assert!(err.to_string().contains("heading-5"));
    }

    #[test]
    fn test_icon_filter_renders_glyph() {
        let env = env_with_filters();
        let html = render_one(&env, r#"{{ "mail" | icon("h-12 w-12") }}"#).unwrap();
        assert!(html.starts_with("<svg"));
        assert!(html.contains("class=\"h-12 w-12\""));
    }

    #[test]
    fn test_icon_filter_rejects_unknown_glyph() {
        let env = env_with_filters();
        assert!(render_one(&env, r#"{{ "gmail" | icon("h-12") }}"#).is_err());
    }
}
