use crate::{
    cli::{processor::FileProcessor, Args},
    config::GeneratorConfig,
    error::Result,
    project::{GenerationRequest, ProjectLayout},
    renderer::TemplateRenderer,
    template::{get_template_engine, processor::TemplateProcessor},
    vcs::GitBootstrap,
};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub project_dir: PathBuf,
    pub day_count: u32,
    pub files_written: usize,
    /// False when the bootstrap was disabled or failed.
    pub vcs_initialized: bool,
}

/// Orchestrates a generation run: templates, file writes, then version control.
pub struct Runner<'a> {
    request: GenerationRequest,
    working_dir: PathBuf,
    config: GeneratorConfig,
    engine: &'a dyn TemplateRenderer,
}

impl<'a> Runner<'a> {
    pub fn new(
        request: GenerationRequest,
        working_dir: PathBuf,
        config: GeneratorConfig,
        engine: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { request, working_dir, config, engine }
    }

    /// Executes the complete generation workflow.
    ///
    /// File system failures abort the run. Version-control failures are only
    /// logged as warnings.
    pub fn run(self) -> Result<GenerationResult> {
        let layout = ProjectLayout::new(&self.working_dir, &self.request);

        if layout.project_dir.exists() {
            log::warn!(
                "Project directory '{}' already exists; generated files will be overwritten",
                layout.project_dir.display()
            );
        }

        let operations =
            TemplateProcessor::new(self.engine, &self.config, &self.request, &layout)
                .process()?;

        let files_written = FileProcessor::new(&operations).process_all_files()?;

        let vcs_initialized = self.bootstrap_vcs(&layout.project_dir);

        Ok(GenerationResult {
            project_dir: layout.project_dir,
            day_count: self.request.day_count(),
            files_written,
            vcs_initialized,
        })
    }

    /// Best-effort repository bootstrap; returns whether it succeeded.
    fn bootstrap_vcs(&self, project_dir: &Path) -> bool {
        let vcs = &self.config.vcs;
        if !vcs.enabled {
            log::info!("Version control bootstrap disabled, skipping");
            return false;
        }

        let commit_message = match self.engine.render(
            &vcs.commit_message,
            &json!({ "year": self.request.year() }),
            Some("commit_message"),
        ) {
            Ok(message) => message,
            Err(e) => {
                log::warn!("Git initialization failed: {e}");
                return false;
            }
        };

        match GitBootstrap::new(&vcs.executable, project_dir, commit_message).run() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Git initialization failed: {e}");
                false
            }
        }
    }
}

/// Generates a project for `request` under `working_dir` without printing anything.
pub fn generate<P: AsRef<Path>>(
    request: GenerationRequest,
    working_dir: P,
    config: GeneratorConfig,
) -> Result<GenerationResult> {
    let engine = get_template_engine()?;
    Runner::new(request, working_dir.as_ref().to_path_buf(), config, &engine).run()
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = GeneratorConfig::load(&working_dir)?;
    let request = GenerationRequest::new(args.year, args.days)?;

    let result = generate(request, &working_dir, config)?;

    if result.vcs_initialized {
        println!("Initialized git repository.");
    }
    println!(
        "Generated Advent of Code Swift project for {} with {} days!",
        request.year(),
        result.day_count
    );
    Ok(())
}
