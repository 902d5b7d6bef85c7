//! Generation parameters and everything derived from them
//!
//! - `request`: the validated `(year, day count)` pair
//! - `layout`: paths of the generated project
//! - `day`: per-day names and the subcommand registry

pub mod day;
pub mod layout;
pub mod request;

pub use day::{DayEntry, DayRegistry};
pub use layout::ProjectLayout;
pub use request::GenerationRequest;
