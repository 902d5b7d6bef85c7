use crate::constants::{COMMAND_PREFIX, PROJECT_PREFIX};
use crate::error::{Error, Result};

use super::day::DayEntry;

/// The parameters of a single generation run. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    year: i32,
    day_count: u32,
}

impl GenerationRequest {
    /// Builds a request, rejecting a day count of zero.
    ///
    /// The year is only used for textual substitution and is not checked
    /// against the calendar.
    pub fn new(year: i32, day_count: u32) -> Result<Self> {
        if day_count == 0 {
            return Err(Error::ValidationError(
                "the number of days must be at least 1".into(),
            ));
        }
        Ok(Self { year, day_count })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// `AdventOfCode<year>`: directory, package, module and root type name.
    pub fn project_name(&self) -> String {
        format!("{PROJECT_PREFIX}{}", self.year)
    }

    /// `aoc-<year>`: name of the generated command-line program.
    pub fn command_name(&self) -> String {
        format!("{COMMAND_PREFIX}{}", self.year)
    }

    /// Days `1..=day_count` in ascending order.
    pub fn days(&self) -> impl Iterator<Item = DayEntry> {
        (1..=self.day_count).map(DayEntry::new)
    }
}
