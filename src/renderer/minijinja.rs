use crate::{error::Result, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::json;

/// MiniJinja-based template rendering engine.
///
/// Output is emitted verbatim: no auto-escaping, trailing newlines kept, and
/// referencing a variable missing from the context is an error.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Default context that will be merged with any provided context
    default_context: serde_json::Value,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let default_context = json!({
            "generator": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            }
        });

        Self { env, default_context }
    }

    /// Merges the default context with the provided one; provided keys win.
    fn merge_context(&self, context: &serde_json::Value) -> serde_json::Value {
        if let (Some(default_obj), Some(context_obj)) =
            (self.default_context.as_object(), context.as_object())
        {
            let mut result = default_obj.clone();
            for (key, value) in context_obj {
                result.insert(key.clone(), value.clone());
            }
            json!(result)
        } else {
            // If either isn't an object, just use the provided context
            context.clone()
        }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &str, template: &str) -> Result<()> {
        // Normalize the template name for cross-platform compatibility
        let normalized_name = name.replace('\\', "/");
        self.env.add_template_owned(normalized_name, template.to_string())?;
        Ok(())
    }

    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("temp");
        let rendered =
            self.env.render_named_str(name, template, self.merge_context(context))?;
        Ok(rendered)
    }

    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        let rendered = tmpl.render(self.merge_context(context))?;
        log::debug!("Rendered template '{name}' ({} bytes)", rendered.len());
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::renderer::{interface::TemplateRenderer, MiniJinjaRenderer};
    use serde_json::json;

    fn test_template(template: &str, context: serde_json::Value, expected: &str) {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render(template, &context, None).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn interpolates_variables() {
        test_template(
            "Initial Advent of Code {{ year }} project",
            json!({ "year": 2024 }),
            "Initial Advent of Code 2024 project",
        );
    }

    #[test]
    fn keeps_trailing_newline() {
        test_template("name: {{ name }}\n", json!({ "name": "x" }), "name: x\n");
    }

    #[test]
    fn does_not_escape_markup() {
        test_template(
            "{{ value }}",
            json!({ "value": "<a href=\"x\">&</a>" }),
            "<a href=\"x\">&</a>",
        );
    }

    #[test]
    fn leaves_swift_syntax_untouched() {
        test_template(
            "print(\"Part 1: \\(part1)\") { get } #expect(x)",
            json!({}),
            "print(\"Part 1: \\(part1)\") { get } #expect(x)",
        );
    }

    #[test]
    fn missing_variable_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("{{ missing }}", &json!({}), None);
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }

    #[test]
    fn default_context_exposes_generator() {
        test_template(
            "{{ generator.name }}",
            json!({}),
            env!("CARGO_PKG_NAME"),
        );
    }

    #[test]
    fn provided_context_overrides_defaults() {
        test_template(
            "{{ generator }}",
            json!({ "generator": "custom" }),
            "custom",
        );
    }

    #[test]
    fn renders_registered_template_by_name() {
        let mut renderer = MiniJinjaRenderer::new();
        renderer.add_template("greeting.txt", "Hello, {{ who }}!\n").unwrap();
        let result = renderer.render_named("greeting.txt", &json!({ "who": "Swift" })).unwrap();
        assert_eq!(result, "Hello, Swift!\n");
    }

    #[test]
    fn unknown_template_name_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        assert!(renderer.render_named("nope", &json!({})).is_err());
    }
}
