#![allow(dead_code)]

use aocgen::config::{GeneratorConfig, VcsConfig};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Default config with the version-control bootstrap switched off.
pub fn config_without_vcs() -> GeneratorConfig {
    GeneratorConfig {
        vcs: VcsConfig { enabled: false, ..VcsConfig::default() },
        ..GeneratorConfig::default()
    }
}

/// Default config pointing at a version-control executable that does not exist.
pub fn config_with_missing_vcs() -> GeneratorConfig {
    GeneratorConfig {
        vcs: VcsConfig {
            executable: "aocgen-missing-vcs-executable".into(),
            ..VcsConfig::default()
        },
        ..GeneratorConfig::default()
    }
}

/// Relative paths of every file under `dir`, skipping any `.git` directory.
pub fn relative_files(dir: &Path) -> BTreeSet<String> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().display().to_string())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("First:  {:?}", dir1);
    println!("Second: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {file}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file}");
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read_to_string(dir1.join(file)).unwrap();
        let content2 = fs::read_to_string(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {file}");
            println!("  --- First content:\n{content1}");
            println!("  --- Second content:\n{content2}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two generated trees are identical, printing the differences first.
pub fn assert_same_tree(dir1: &Path, dir2: &Path) {
    if dir_diff::is_different(dir1, dir2).unwrap() {
        print_dir_diff(dir1, dir2);
        panic!("Directories differ. See above for details.");
    }
}
