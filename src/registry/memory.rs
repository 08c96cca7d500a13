//! In-memory registry, optionally loaded from a TOML snapshot.
//!
//! A snapshot lists keys with their string values:
//!
//! ```toml
//! [keys.'HKEY_LOCAL_MACHINE\SOFTWARE\Wow6432Node\Microsoft\VisualStudio\14.0']
//! InstallDir = 'C:\Program Files (x86)\Microsoft Visual Studio 14.0\Common7\IDE'
//! ```
//!
//! Intermediate keys exist implicitly. Lookups ignore ASCII case.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::util::errors::{ClwrapError, Result};

use super::VersionRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MemoryRegistry {
    #[serde(default)]
    keys: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        MemoryRegistry::default()
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClwrapError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ClwrapError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Create `key` (and implicitly its parents) with no values.
    pub fn add_key(&mut self, key: impl Into<String>) {
        self.keys.entry(key.into()).or_default();
    }

    /// Set a string value, creating the key as needed.
    pub fn set_value(&mut self, key: impl Into<String>, name: impl Into<String>, value: impl Into<String>) {
        self.keys
            .entry(key.into())
            .or_default()
            .insert(name.into(), value.into());
    }

    /// Builder form of [`MemoryRegistry::set_value`].
    pub fn with_value(mut self, key: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_value(key, name, value);
        self
    }
}

impl VersionRegistry for MemoryRegistry {
    fn child_keys(&self, path: &str) -> Result<Vec<String>> {
        let path = path.trim_end_matches('\\');
        let mut children: Vec<String> = Vec::new();

        for key in self.keys.keys() {
            let Some(head) = key.get(..path.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(path) {
                continue;
            }
            let Some(rest) = key[path.len()..].strip_prefix('\\') else {
                continue;
            };
            let child = rest.split('\\').next().unwrap_or_default();
            if child.is_empty() || children.iter().any(|c| c.eq_ignore_ascii_case(child)) {
                continue;
            }
            children.push(child.to_string());
        }

        Ok(children)
    }

    fn string_value(&self, key: &str, name: &str) -> Result<Option<String>> {
        let value = self
            .keys
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, values)| {
                values
                    .iter()
                    .find(|(n, _)| n.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v.clone())
            });

        Ok(value)
    }
}
