// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by the CLI tests, not by the library tests.
pub fn rowprune_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rowprune"))
}

/// Write `content` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write test input");
    path
}

/// Lesson plan parts with one present, one empty, one absent and one present subject.
#[allow(dead_code)]
pub const LESSON_PARTS: &str = "id,key,subject_id\n1,learningOutcome,5\n2,keywords,\n3,misconceptions\n4,starterQuiz,7\n";
