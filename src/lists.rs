//! Reading extra paths from list files (`-T FILE`)

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Failure;

/// Split raw list contents into paths. Empty segments are dropped.
pub fn split_list(bytes: &[u8], delimiter: u8) -> Vec<PathBuf> {
    bytes
        .split(|&b| b == delimiter)
        .filter(|segment| !segment.is_empty())
        .map(path_from_bytes)
        .collect()
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Read one list file; `-` means standard input.
pub fn read_list(path: &Path, delimiter: u8) -> Result<Vec<PathBuf>, Failure> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
    } else {
        fs::read(path)
    }
    .map_err(|source| Failure::List {
        path: path.to_path_buf(),
        source,
    })?;

    let paths = split_list(&bytes, delimiter);
    debug!(list = %path.display(), paths = paths.len(), "read list file");
    Ok(paths)
}

/// Read every list file in order, collecting paths and failures separately.
pub fn read_lists(files: &[PathBuf], delimiter: u8) -> (Vec<PathBuf>, Vec<Failure>) {
    let mut paths = Vec::new();
    let mut failures = Vec::new();
    for file in files {
        match read_list(file, delimiter) {
            Ok(mut listed) => paths.append(&mut listed),
            Err(failure) => failures.push(failure),
        }
    }
    (paths, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_newlines_skips_empty() {
        let paths = split_list(b"a\n\nb/c\n", b'\n');
        assert_eq!(paths, [PathBuf::from("a"), PathBuf::from("b/c")]);
    }

    #[test]
    fn test_split_nul_keeps_newlines_in_names() {
        let paths = split_list(b"with\nnewline\0plain\0", b'\0');
        assert_eq!(paths, [PathBuf::from("with\nnewline"), PathBuf::from("plain")]);
    }

    #[test]
    fn test_carriage_return_is_kept() {
        let paths = split_list(b"dos\r\n", b'\n');
        assert_eq!(paths, [PathBuf::from("dos\r")]);
    }

    #[test]
    fn test_read_lists_in_order_with_failures() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "one\ntwo\n").unwrap();
        fs::write(&second, "three").unwrap();
        let missing = dir.path().join("missing.txt");

        let (paths, failures) = read_lists(&[first, missing.clone(), second], b'\n');
        assert_eq!(
            paths,
            [PathBuf::from("one"), PathBuf::from("two"), PathBuf::from("three")]
        );
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path(), &missing);
        assert!(failures[0].to_string().starts_with("cannot read list"));
    }
}
