//! Constants used throughout the aocgen application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["aocgen.json", "aocgen.yaml", "aocgen.yml"];

/// Prefix of the generated project directory, Swift package and module names
pub const PROJECT_PREFIX: &str = "AdventOfCode";

/// Prefix of the generated command-line program name
pub const COMMAND_PREFIX: &str = "aoc-";

/// Literal every generated placeholder phase returns
pub const NOT_IMPLEMENTED: &str = "Not implemented";

/// Separator between entries of the generated subcommand list
pub const SUBCOMMAND_SEPARATOR: &str = ",\n      ";

/// Default logging filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Defaults for the generated project
pub mod defaults {
    pub const SWIFT_TOOLS_VERSION: &str = "6.0";
    pub const MACOS_VERSION: &str = "v13";
    pub const ARGUMENT_PARSER_VERSION: &str = "1.3.0";
    pub const SESSION_ENV_VAR: &str = "AOC_SESSION";
    pub const PUZZLE_HOST: &str = "https://adventofcode.com";
    pub const VCS_EXECUTABLE: &str = "git";
    pub const COMMIT_MESSAGE: &str = "Initial Advent of Code {{ year }} project";
}

/// Generated project file and directory names
pub mod layout {
    pub const MANIFEST_FILE: &str = "Package.swift";
    pub const IGNORE_FILE: &str = ".gitignore";
    pub const README_FILE: &str = "README.md";
    pub const DAY_PROTOCOL_FILE: &str = "AdventOfCodeDay.swift";
    pub const ENTRY_POINT_FILE: &str = "AdventOfCode.swift";
    pub const SOURCES_DIR: &str = "Sources";
    pub const TESTS_DIR: &str = "Tests";
    pub const INPUTS_DIR: &str = "Inputs";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
