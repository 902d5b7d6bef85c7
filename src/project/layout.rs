use std::path::{Path, PathBuf};

use crate::constants::layout::{INPUTS_DIR, SOURCES_DIR, TESTS_DIR};

use super::request::GenerationRequest;

/// Paths of a generated project, all derived from the working directory and year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub project_dir: PathBuf,
    pub sources_dir: PathBuf,
    pub tests_dir: PathBuf,
    pub inputs_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new<P: AsRef<Path>>(working_dir: P, request: &GenerationRequest) -> Self {
        let project_name = request.project_name();
        let project_dir = working_dir.as_ref().join(&project_name);
        let sources_dir = project_dir.join(SOURCES_DIR).join(&project_name);
        let tests_dir = project_dir.join(TESTS_DIR).join(format!("{project_name}Tests"));
        let inputs_dir = sources_dir.join(INPUTS_DIR);

        Self { project_dir, sources_dir, tests_dir, inputs_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_paths_under_working_dir() {
        let request = GenerationRequest::new(2024, 1).unwrap();
        let layout = ProjectLayout::new("/work", &request);

        assert_eq!(layout.project_dir, PathBuf::from("/work/AdventOfCode2024"));
        assert_eq!(
            layout.sources_dir,
            PathBuf::from("/work/AdventOfCode2024/Sources/AdventOfCode2024")
        );
        assert_eq!(
            layout.tests_dir,
            PathBuf::from("/work/AdventOfCode2024/Tests/AdventOfCode2024Tests")
        );
        assert_eq!(
            layout.inputs_dir,
            PathBuf::from("/work/AdventOfCode2024/Sources/AdventOfCode2024/Inputs")
        );
    }
}
