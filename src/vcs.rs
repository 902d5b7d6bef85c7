use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Creates a repository over a freshly generated project and commits
/// everything in it.
///
/// The three commands run in order in the project directory: `init`,
/// `add .` and `commit -m <message>`. The first failure stops the sequence.
pub struct GitBootstrap<'a> {
    executable: &'a str,
    project_dir: &'a Path,
    commit_message: String,
}

impl<'a> GitBootstrap<'a> {
    pub fn new(executable: &'a str, project_dir: &'a Path, commit_message: String) -> Self {
        Self { executable, project_dir, commit_message }
    }

    pub fn run(&self) -> Result<()> {
        self.run_command(&["init"])?;
        self.run_command(&["add", "."])?;
        self.run_command(&["commit", "-m", self.commit_message.as_str()])?;
        Ok(())
    }

    /// Runs one command to completion and returns its stdout.
    ///
    /// # Notes
    /// - A command that cannot be started yields `Error::VcsSpawnError`
    /// - A non-zero exit status yields `Error::VcsCommandError` carrying stderr
    fn run_command(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.executable, args.join(" "));
        log::debug!("Running '{command}' in {}", self.project_dir.display());

        let output = Command::new(self.executable)
            .args(args)
            .current_dir(self.project_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::VcsSpawnError { command: command.clone(), source })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !stdout.is_empty() {
            log::debug!("'{command}' stdout: {stdout}");
        }

        if !output.status.success() {
            return Err(Error::VcsCommandError {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(stdout)
    }
}
