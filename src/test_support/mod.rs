//! Test utilities for clwrap unit tests.
//!
//! Discovery and path construction only ever probe the filesystem through
//! [`FileSystem`], so tests describe a Visual Studio / Windows SDK layout in
//! memory instead of needing a Windows machine.
//!
//! # Example
//!
//! ```rust,ignore
//! use clwrap::test_support::MemoryFileSystem;
//!
//! let mut fs = MemoryFileSystem::new();
//! fs.add_file(r"C:\VS\VC\bin\cl.exe");
//! assert!(fs.exists(r"C:\VS\Common7\IDE\..\..\VC\bin\cl.exe"));
//! ```

pub mod fixtures;

use std::collections::BTreeSet;

use crate::util::errors::{ClwrapError, Result};
use crate::util::fs::{DirEntry, FileSystem};

/// In-memory filesystem keyed by Windows-style paths.
///
/// Paths are compared case-insensitively after resolving `.` and `..`
/// segments. Parent directories of every added file exist implicitly.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
}

impl MemoryFileSystem {
    /// Create a new empty filesystem.
    pub fn new() -> Self {
        MemoryFileSystem::default()
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&mut self, path: &str) {
        let path = normalize(path);
        if let Some((parent, _)) = path.rsplit_once('\\') {
            self.add_dir(parent);
        }
        self.files.insert(path);
    }

    /// Add a directory and all of its parents.
    pub fn add_dir(&mut self, path: &str) {
        let mut current = normalize(path);
        loop {
            if !self.dirs.insert(current.clone()) {
                break;
            }
            match current.rsplit_once('\\') {
                Some((parent, _)) => current = parent.to_string(),
                None => break,
            }
        }
    }

    /// Builder form of [`MemoryFileSystem::add_file`].
    pub fn with_file(mut self, path: &str) -> Self {
        self.add_file(path);
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &str) -> bool {
        let path = normalize(path);
        self.files.contains(&path) || self.dirs.contains(&path)
    }

    fn list_dir(&self, path: &str) -> Result<Vec<DirEntry>> {
        let path = normalize(path);
        if !self.dirs.contains(&path) {
            return Err(ClwrapError::Io {
                path,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        let prefix = format!("{}\\", path);
        let child = |p: &String| -> Option<String> {
            let rest = p.strip_prefix(&prefix)?;
            (!rest.contains('\\')).then(|| rest.to_string())
        };

        let mut entries: Vec<DirEntry> = self
            .dirs
            .iter()
            .filter_map(child)
            .map(|name| DirEntry { name, is_dir: true })
            .collect();
        entries.extend(
            self.files
                .iter()
                .filter_map(child)
                .map(|name| DirEntry { name, is_dir: false }),
        );

        Ok(entries)
    }
}

/// Lower-case and resolve `.`/`..` segments lexically.
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(['\\', '/']) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts.join("\\").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_resolves_parent_segments() {
        let fs = MemoryFileSystem::new().with_file(r"C:\VS 14.0\VC\bin\amd64\cl.exe");

        assert!(fs.exists(r"C:\VS 14.0\Common7\IDE\..\..\VC\bin\amd64\cl.exe"));
        assert!(fs.exists(r"c:\vs 14.0\vc\bin"));
        assert!(!fs.exists(r"C:\VS 14.0\VC\bin\cl.exe"));
    }

    #[test]
    fn test_memory_fs_lists_immediate_children() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file(r"C:\Kits\10\include\10.0.1\um\windows.h");
        fs.add_file(r"C:\Kits\10\include\readme.txt");
        fs.add_dir(r"C:\Kits\10\include\10.0.2");

        let mut names: Vec<(String, bool)> = fs
            .list_dir(r"C:\Kits\10\include\")
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.is_dir))
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                ("10.0.1".to_string(), true),
                ("10.0.2".to_string(), true),
                ("readme.txt".to_string(), false),
            ]
        );
        assert!(fs.list_dir(r"C:\Kits\8.1").is_err());
    }
}
