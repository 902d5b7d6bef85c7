use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|source| Error::WriteError {
        target: dest_path.display().to_string(),
        source,
    })
}

/// Writes `content` to `dest_path`, creating parent directories if needed.
/// An existing file is replaced.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|source| Error::WriteError {
        target: dest_path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file_creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/c.txt");
        write_file("hello", &target).unwrap();
        assert_eq!(std::fs::read_to_string(target).unwrap(), "hello");
    }

    #[test]
    fn write_file_overwrites_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("file.txt");
        write_file("first", &target).unwrap();
        write_file("second", &target).unwrap();
        assert_eq!(std::fs::read_to_string(target).unwrap(), "second");
    }

    #[test]
    fn write_file_reports_target_on_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_file("x", blocker.join("child.txt")).unwrap_err();
        assert!(matches!(err, Error::WriteError { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
