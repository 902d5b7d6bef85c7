//! Template rendering
//!
//! - `interface`: the `TemplateRenderer` trait
//! - `minijinja`: the MiniJinja-backed implementation

pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
