//! Filesystem probes used by discovery and path construction.
//!
//! Toolchain paths are kept as Windows-style strings (`\` separated) because
//! they end up verbatim on the generated command line. They are translated to
//! native paths only when the filesystem is actually touched.

use std::path::PathBuf;

use walkdir::WalkDir;

use super::errors::{ClwrapError, Result};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Existence probes and directory listings.
pub trait FileSystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Immediate children of `path`, excluding `.` and `..`.
    fn list_dir(&self, path: &str) -> Result<Vec<DirEntry>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &str) -> bool {
        native_path(path).exists()
    }

    fn list_dir(&self, path: &str) -> Result<Vec<DirEntry>> {
        let root = native_path(path);
        let mut entries = Vec::new();

        for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ClwrapError::Io {
                path: path.to_string(),
                source: e.into(),
            })?;

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            });
        }

        Ok(entries)
    }
}

/// Join a relative Windows path onto a base with a single separator.
pub fn win_join(base: &str, relative: &str) -> String {
    format!("{}\\{}", base.trim_end_matches('\\'), relative)
}

/// Convert a `\`-separated path to the host's representation.
pub fn native_path(path: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(path)
    } else {
        PathBuf::from(path.replace('\\', "/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_win_join() {
        assert_eq!(win_join(r"C:\SDK", "include"), r"C:\SDK\include");
        assert_eq!(win_join(r"C:\SDK\", "include"), r"C:\SDK\include");
    }

    #[test]
    fn test_os_filesystem_lists_immediate_children() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("10.0.1").join("um")).unwrap();
        std::fs::write(tmp.path().join("readme.txt"), "x").unwrap();

        let root = tmp.path().to_string_lossy().into_owned();
        let mut entries = OsFileSystem.list_dir(&root).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry {
                    name: "10.0.1".to_string(),
                    is_dir: true
                },
                DirEntry {
                    name: "readme.txt".to_string(),
                    is_dir: false
                },
            ]
        );
        assert!(OsFileSystem.exists(&win_join(&root, r"10.0.1\um")));
        assert!(!OsFileSystem.exists(&win_join(&root, r"10.0.1\shared")));
    }

    #[test]
    fn test_os_filesystem_missing_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope").to_string_lossy().into_owned();
        assert!(OsFileSystem.list_dir(&missing).is_err());
    }
}
