/// Handles argument parsing and orchestrates a generation run.
pub mod cli;

/// Generator configuration loading.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Generation request, project layout and day naming.
pub mod project;

/// Template rendering.
pub mod renderer;

/// Built-in templates and their expansion into file operations.
pub mod template;

/// Version-control bootstrap of the generated project.
pub mod vcs;

pub use cli::{generate, GenerationResult};
pub use config::GeneratorConfig;
pub use project::GenerationRequest;
