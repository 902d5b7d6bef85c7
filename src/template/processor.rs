use serde_json::json;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::constants::{layout, NOT_IMPLEMENTED};
use crate::error::Result;
use crate::project::{DayEntry, DayRegistry, GenerationRequest, ProjectLayout};
use crate::renderer::TemplateRenderer;

use super::builtin;
use super::operation::TemplateOperation;

/// Expands the built-in templates for one generation request.
///
/// Rendering is a pure function of the request and config; only the
/// `target_exists` flags look at the file system.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    config: &'a GeneratorConfig,

    /// Other
    request: &'a GenerationRequest,
    layout: &'a ProjectLayout,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        config: &'a GeneratorConfig,
        request: &'a GenerationRequest,
        layout: &'a ProjectLayout,
    ) -> Self {
        Self { engine, config, request, layout }
    }

    /// Builds every operation of the run, in the order they must be performed:
    /// project directory, manifest, ignore file, README, day protocol, then per
    /// day the implementation, its tests and an empty input, and finally the
    /// root entry point listing all days.
    pub fn process(&self) -> Result<Vec<TemplateOperation>> {
        let context = self.project_context();
        let project_dir = &self.layout.project_dir;

        let mut operations = vec![TemplateOperation::CreateDirectory {
            target: project_dir.clone(),
            target_exists: project_dir.exists(),
        }];

        operations.push(self.render_to(
            builtin::MANIFEST,
            &context,
            project_dir.join(layout::MANIFEST_FILE),
        )?);
        operations.push(self.render_to(
            builtin::IGNORE,
            &context,
            project_dir.join(layout::IGNORE_FILE),
        )?);
        operations.push(self.render_to(
            builtin::README,
            &context,
            project_dir.join(layout::README_FILE),
        )?);
        operations.push(self.render_to(
            builtin::DAY_PROTOCOL,
            &context,
            self.layout.sources_dir.join(layout::DAY_PROTOCOL_FILE),
        )?);

        let mut registry = DayRegistry::new();
        for day in self.request.days() {
            let day_context = self.day_context(&day);

            operations.push(self.render_to(
                builtin::DAY,
                &day_context,
                self.layout.sources_dir.join(day.source_file_name()),
            )?);
            operations.push(self.render_to(
                builtin::DAY_TESTS,
                &day_context,
                self.layout.tests_dir.join(day.test_file_name()),
            )?);
            operations.push(write_operation(
                self.layout.inputs_dir.join(day.input_file_name()),
                String::new(),
            ));

            registry.push(day);
        }

        let mut entry_context = context;
        entry_context["subcommands"] = json!(registry.subcommand_list());
        operations.push(self.render_to(
            builtin::ENTRY_POINT,
            &entry_context,
            self.layout.sources_dir.join(layout::ENTRY_POINT_FILE),
        )?);

        Ok(operations)
    }

    fn render_to(
        &self,
        template_name: &str,
        context: &serde_json::Value,
        target: PathBuf,
    ) -> Result<TemplateOperation> {
        let content = self.engine.render_named(template_name, context)?;
        Ok(write_operation(target, content))
    }

    fn project_context(&self) -> serde_json::Value {
        json!({
            "project_name": self.request.project_name(),
            "command_name": self.request.command_name(),
            "year": self.request.year(),
            "day_count": self.request.day_count(),
            "swift_tools_version": self.config.swift_tools_version,
            "macos_version": self.config.macos_version,
            "argument_parser_version": self.config.argument_parser_version,
            "session_env_var": self.config.session_env_var,
            "puzzle_host": self.config.puzzle_host,
            "not_implemented": NOT_IMPLEMENTED,
        })
    }

    fn day_context(&self, day: &DayEntry) -> serde_json::Value {
        let mut context = self.project_context();
        context["day"] = json!(day.index());
        context["type_name"] = json!(day.type_name());
        context["test_type_name"] = json!(day.test_type_name());
        context
    }
}

fn write_operation(target: PathBuf, content: String) -> TemplateOperation {
    let target_exists = target.exists();
    TemplateOperation::Write { target, content, target_exists }
}
