//! Test harness for pathls integration tests

use std::path::Path;
use std::process::Command;

pub use pathls::test_utils::TestTree;

/// Run the binary inside `dir`, returning (stdout, stderr, success).
#[allow(dead_code)]
pub fn run_pathls(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = run_pathls_raw(dir, args);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run the binary inside `dir` and keep the raw output.
#[allow(dead_code)]
pub fn run_pathls_raw(dir: &Path, args: &[&str]) -> std::process::Output {
    let binary = env!("CARGO_BIN_EXE_pathls");
    Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pathls")
}

/// Split newline-terminated output into records.
#[allow(dead_code)]
pub fn records(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "content");
        assert!(file_path.exists());
    }
}
