use crate::constants::SUBCOMMAND_SEPARATOR;

/// One puzzle day. The display name is the index padded to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayEntry {
    index: u32,
}

impl DayEntry {
    pub fn new(index: u32) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// `3` -> `"03"`, `12` -> `"12"`.
    pub fn display_name(&self) -> String {
        format!("{:02}", self.index)
    }

    /// Swift type implementing the day, e.g. `Day03`.
    pub fn type_name(&self) -> String {
        format!("Day{}", self.display_name())
    }

    pub fn test_type_name(&self) -> String {
        format!("{}Tests", self.type_name())
    }

    pub fn source_file_name(&self) -> String {
        format!("{}.swift", self.type_name())
    }

    pub fn test_file_name(&self) -> String {
        format!("{}.swift", self.test_type_name())
    }

    pub fn input_file_name(&self) -> String {
        format!("day{}.txt", self.display_name())
    }

    /// Reference to the day's type in the root command's subcommand list.
    pub fn registry_entry(&self) -> String {
        format!("{}.self", self.type_name())
    }
}

/// Days accumulated during generation, in the order they were written.
#[derive(Debug, Default)]
pub struct DayRegistry {
    entries: Vec<DayEntry>,
}

impl DayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: DayEntry) {
        self.entries.push(day);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The subcommand list body: `Day01.self,\n      Day02.self, ...`
    pub fn subcommand_list(&self) -> String {
        self.entries
            .iter()
            .map(DayEntry::registry_entry)
            .collect::<Vec<_>>()
            .join(SUBCOMMAND_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_days() {
        let day = DayEntry::new(3);
        assert_eq!(day.display_name(), "03");
        assert_eq!(day.type_name(), "Day03");
        assert_eq!(day.source_file_name(), "Day03.swift");
        assert_eq!(day.test_file_name(), "Day03Tests.swift");
        assert_eq!(day.input_file_name(), "day03.txt");
        assert_eq!(day.registry_entry(), "Day03.self");
    }

    #[test]
    fn keeps_two_digit_days() {
        let day = DayEntry::new(12);
        assert_eq!(day.type_name(), "Day12");
        assert_eq!(day.input_file_name(), "day12.txt");
    }

    #[test]
    fn three_digit_days_are_not_truncated() {
        assert_eq!(DayEntry::new(100).type_name(), "Day100");
    }

    #[test]
    fn subcommand_list_joins_in_insertion_order() {
        let mut registry = DayRegistry::new();
        assert!(registry.is_empty());
        for index in 1..=3 {
            registry.push(DayEntry::new(index));
        }
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.subcommand_list(),
            "Day01.self,\n      Day02.self,\n      Day03.self"
        );
    }

    #[test]
    fn single_day_has_no_separator() {
        let mut registry = DayRegistry::new();
        registry.push(DayEntry::new(1));
        assert_eq!(registry.subcommand_list(), "Day01.self");
    }
}
