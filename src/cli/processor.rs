use crate::{error::Result, ioutils, template::operation::TemplateOperation};

/// Performs planned operations strictly in order.
///
/// The first failure aborts the run; whatever was written before it stays on disk.
pub struct FileProcessor<'a> {
    operations: &'a [TemplateOperation],
}

impl<'a> FileProcessor<'a> {
    pub fn new(operations: &'a [TemplateOperation]) -> Self {
        Self { operations }
    }

    /// Processes every operation and returns the number of files written.
    pub fn process_all_files(&self) -> Result<usize> {
        let mut files_written = 0;
        for file_operation in self.operations {
            if self.handle_file_operation(file_operation)? {
                files_written += 1;
            }
            log::info!("{}", file_operation.get_message());
        }
        Ok(files_written)
    }

    /// Handles a single operation; returns whether a file was written.
    fn handle_file_operation(&self, file_operation: &TemplateOperation) -> Result<bool> {
        log::debug!("Handling file operation: {}", file_operation.error_context());
        match file_operation {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    ioutils::create_dir_all(target)?;
                }
                Ok(false)
            }
            TemplateOperation::Write { target, content, .. } => {
                ioutils::write_file(content, target)?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn writes_files_in_order_and_counts_them() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");
        let operations = vec![
            TemplateOperation::CreateDirectory { target: root.clone(), target_exists: false },
            TemplateOperation::Write {
                target: root.join("a.txt"),
                content: "a".into(),
                target_exists: false,
            },
            TemplateOperation::Write {
                target: root.join("nested/b.txt"),
                content: "".into(),
                target_exists: false,
            },
        ];

        let written = FileProcessor::new(&operations).process_all_files().unwrap();
        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(root.join("a.txt")).unwrap(), "a");
        assert_eq!(std::fs::read_to_string(root.join("nested/b.txt")).unwrap(), "");
    }

    #[test]
    fn stops_at_first_failure_keeping_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();

        let operations = vec![
            TemplateOperation::Write {
                target: tmp.path().join("first.txt"),
                content: "1".into(),
                target_exists: false,
            },
            TemplateOperation::Write {
                target: blocker.join("second.txt"),
                content: "2".into(),
                target_exists: false,
            },
            TemplateOperation::Write {
                target: tmp.path().join("third.txt"),
                content: "3".into(),
                target_exists: false,
            },
        ];

        let err = FileProcessor::new(&operations).process_all_files().unwrap_err();
        assert!(matches!(err, Error::WriteError { .. }));
        assert!(tmp.path().join("first.txt").exists());
        assert!(!tmp.path().join("third.txt").exists());
    }
}
