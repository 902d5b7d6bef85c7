//! Configuration management for aocgen
//!
//! - `loader`: optional config file discovery, parsing and validation

pub mod loader;


pub use loader::{GeneratorConfig, VcsConfig};
