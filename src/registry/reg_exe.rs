//! Live registry access through `reg.exe query`.

use std::path::PathBuf;

use crate::util::errors::{ClwrapError, Result};
use crate::util::process::ProcessBuilder;

use super::VersionRegistry;

/// Queries the Windows registry by running `reg.exe`.
#[derive(Debug, Clone)]
pub struct RegExeRegistry {
    reg: PathBuf,
}

impl RegExeRegistry {
    /// Locate `reg.exe` on the search path.
    pub fn detect() -> Option<Self> {
        which::which("reg").ok().map(|reg| RegExeRegistry { reg })
    }

    /// Run `reg query` and return stdout, or `None` if the key or value is missing.
    fn query(&self, key: &str, value: Option<&str>) -> Result<Option<String>> {
        let mut cmd = ProcessBuilder::new(&self.reg).arg("query").arg(key);
        if let Some(name) = value {
            cmd = cmd.arg("/v").arg(name);
        }

        let output = cmd.exec().map_err(|e| match e {
            ClwrapError::ExternalToolFailure { program, source } => ClwrapError::Registry {
                key: key.to_string(),
                message: format!("cannot run {}: {}", program, source),
            },
            other => other,
        })?;

        match output.status.code() {
            Some(0) => Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned())),
            // reg.exe reports a missing key or value with status 1
            Some(1) => {
                tracing::trace!("registry key not present: {}", key);
                Ok(None)
            }
            code => Err(ClwrapError::Registry {
                key: key.to_string(),
                message: format!(
                    "reg.exe exited with {:?}: {}",
                    code,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            }),
        }
    }
}

impl VersionRegistry for RegExeRegistry {
    fn child_keys(&self, path: &str) -> Result<Vec<String>> {
        let Some(stdout) = self.query(path, None)? else {
            return Ok(Vec::new());
        };
        Ok(parse_child_keys(&stdout, path))
    }

    fn string_value(&self, key: &str, name: &str) -> Result<Option<String>> {
        let Some(stdout) = self.query(key, Some(name))? else {
            return Ok(None);
        };

        match parse_value(&stdout, name) {
            Some((kind, value)) if kind == "REG_SZ" => Ok(Some(value)),
            Some((kind, _)) => Err(ClwrapError::Registry {
                key: key.to_string(),
                message: format!("value `{}` has type {}, expected REG_SZ", name, kind),
            }),
            None => Ok(None),
        }
    }
}

/// Sub-key lines are unindented full paths directly below `parent`.
fn parse_child_keys(stdout: &str, parent: &str) -> Vec<String> {
    let parent = parent.trim_end_matches('\\');

    stdout
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.starts_with(' '))
        .filter_map(|line| {
            let head = line.get(..parent.len())?;
            if !head.eq_ignore_ascii_case(parent) {
                return None;
            }
            let child = line[parent.len()..].strip_prefix('\\')?;
            (!child.is_empty() && !child.contains('\\')).then(|| child.to_string())
        })
        .collect()
}

/// Value lines look like `    Name    REG_SZ    data`.
fn parse_value(stdout: &str, name: &str) -> Option<(String, String)> {
    stdout.lines().find_map(|line| {
        let line = line.strip_prefix("    ")?;
        let mut fields = line.splitn(3, "    ");
        let value_name = fields.next()?;
        if !value_name.eq_ignore_ascii_case(name) {
            return None;
        }
        let kind = fields.next()?.trim().to_string();
        let data = fields.next().unwrap_or("").trim_end_matches(['\r', '\n']).to_string();
        Some((kind, data))
    })
}
