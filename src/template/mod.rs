//! Template processing engine for aocgen
//!
//! This module contains the core template processing components:
//! - `builtin`: The templates compiled into the binary
//! - `operation`: Defines operations to be performed on the file system
//! - `processor`: Turns a generation request into the ordered list of operations

pub mod builtin;
pub mod operation;
pub mod processor;

use crate::error::Result;
use crate::renderer::MiniJinjaRenderer;

/// Creates a renderer with every built-in template registered.
pub fn get_template_engine() -> Result<MiniJinjaRenderer> {
    let mut engine = MiniJinjaRenderer::new();
    builtin::register(&mut engine)?;
    Ok(engine)
}
