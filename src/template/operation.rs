use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
}

impl TemplateOperation {
    /// Returns the target path for this operation.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target, .. } => target,
            TemplateOperation::Write { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            TemplateOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!("Skipping directory creation '{}' (already exists)", target.display())
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!("Writing to '{}' (overwriting existing file)", target.display())
                } else {
                    format!("Writing to '{}'", target.display())
                }
            }
        }
    }
}
