pub mod args;
pub mod processor;
pub mod runner;

pub use args::{get_args, init_logging, Args};
pub use runner::{generate, run, GenerationResult, Runner};
