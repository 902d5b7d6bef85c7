//! Configuration loading and management

use crate::constants::{defaults, CONFIG_FILENAMES};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// Settings of the generated project besides the year and day count.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default = "get_default_swift_tools_version")]
    pub swift_tools_version: String,
    #[serde(default = "get_default_macos_version")]
    pub macos_version: String,
    #[serde(default = "get_default_argument_parser_version")]
    pub argument_parser_version: String,
    /// Environment variable the generated project reads its session cookie from.
    #[serde(default = "get_default_session_env_var")]
    pub session_env_var: String,
    #[serde(default = "get_default_puzzle_host")]
    pub puzzle_host: String,
    #[serde(default)]
    pub vcs: VcsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VcsConfig {
    #[serde(default = "get_default_vcs_enabled")]
    pub enabled: bool,
    #[serde(default = "get_default_vcs_executable")]
    pub executable: String,
    /// Interpolated with `year` before committing.
    #[serde(default = "get_default_commit_message")]
    pub commit_message: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            swift_tools_version: get_default_swift_tools_version(),
            macos_version: get_default_macos_version(),
            argument_parser_version: get_default_argument_parser_version(),
            session_env_var: get_default_session_env_var(),
            puzzle_host: get_default_puzzle_host(),
            vcs: VcsConfig::default(),
        }
    }
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            enabled: get_default_vcs_enabled(),
            executable: get_default_vcs_executable(),
            commit_message: get_default_commit_message(),
        }
    }
}

impl GeneratorConfig {
    /// Loads the first config file found in `working_dir`, or the defaults when
    /// there is none. The result is validated and normalized.
    pub fn load<P: AsRef<Path>>(working_dir: P) -> Result<Self> {
        let working_dir = working_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = working_dir.join(config_file_name);

            if config_file_path.exists() {
                log::debug!("Loading config from {}", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                let config: GeneratorConfig = if config_file_name.ends_with(".json") {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)?
                };

                return config.validated();
            }
        }

        log::debug!("No config file in {}, using defaults", working_dir.display());
        Self::default().validated()
    }

    /// Checks every field and strips a trailing slash from `puzzle_host`.
    pub fn validated(mut self) -> Result<Self> {
        for (field, value) in [
            ("swift_tools_version", &self.swift_tools_version),
            ("macos_version", &self.macos_version),
            ("argument_parser_version", &self.argument_parser_version),
            ("vcs.executable", &self.vcs.executable),
        ] {
            if value.trim().is_empty() {
                return Err(Error::ConfigValidation(format!("{field} must not be empty")));
            }
        }

        if !is_env_var_name(&self.session_env_var) {
            return Err(Error::ConfigValidation(format!(
                "session_env_var '{}' is not a valid environment variable name",
                self.session_env_var
            )));
        }

        let host = Url::parse(&self.puzzle_host).map_err(|e| {
            Error::ConfigValidation(format!(
                "puzzle_host '{}' is not a valid URL: {e}",
                self.puzzle_host
            ))
        })?;
        if !matches!(host.scheme(), "http" | "https") {
            return Err(Error::ConfigValidation(format!(
                "puzzle_host '{}' must use http or https",
                self.puzzle_host
            )));
        }
        self.puzzle_host = host.as_str().trim_end_matches('/').to_string();

        Ok(self)
    }
}

fn is_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn get_default_swift_tools_version() -> String {
    defaults::SWIFT_TOOLS_VERSION.to_string()
}

fn get_default_macos_version() -> String {
    defaults::MACOS_VERSION.to_string()
}

fn get_default_argument_parser_version() -> String {
    defaults::ARGUMENT_PARSER_VERSION.to_string()
}

fn get_default_session_env_var() -> String {
    defaults::SESSION_ENV_VAR.to_string()
}

fn get_default_puzzle_host() -> String {
    defaults::PUZZLE_HOST.to_string()
}

fn get_default_vcs_enabled() -> bool {
    true
}

fn get_default_vcs_executable() -> String {
    defaults::VCS_EXECUTABLE.to_string()
}

fn get_default_commit_message() -> String {
    defaults::COMMIT_MESSAGE.to_string()
}
