//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a file exactly `size` bytes long.
    pub fn add_sized(&self, path: &str, size: usize) -> PathBuf {
        self.add_file(path, &"0".repeat(size))
    }

    /// Populate a tree `depth` levels deep with `width` files and
    /// `width` subdirectories per level.
    pub fn populate(&self, depth: usize, width: usize) {
        fn fill(base: &Path, depth: usize, width: usize) {
            for i in 0..width {
                fs::write(base.join(format!("file_{i}.txt")), "x").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let sub = base.join(format!("dir_{i}"));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, width);
            }
        }
        fill(self.dir.path(), depth, width);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
