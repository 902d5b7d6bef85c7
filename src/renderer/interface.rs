use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Adds a named template to the renderer's template collection.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `template` - Template content as string
    fn add_template(&mut self, name: &str, template: &str) -> Result<()>;

    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String>;

    /// Renders a template previously registered with [`TemplateRenderer::add_template`].
    ///
    /// # Arguments
    /// * `name` - Name the template was registered under
    /// * `context` - Context variables for rendering
    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
