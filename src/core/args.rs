//! Flags shared by every wrapper: toolset selection, architecture, CRT linkage
//! and library search.

use std::fmt;

use crate::util::errors::{ClwrapError, Result};

/// An optional `major.minor` constraint requested with `-V` or `-sdkversion`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionSpec {
    pub specified: bool,
    pub major: u16,
    pub minor: u16,
}

impl VersionSpec {
    /// A constraint on exactly `major.minor`.
    pub fn exact(major: u16, minor: u16) -> Self {
        VersionSpec {
            specified: true,
            major,
            minor,
        }
    }

    /// Parse `MAJOR[.MINOR]`, with an optional leading `v`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ClwrapError::invalid_argument(format!("invalid version: {}", text));

        let trimmed = text.strip_prefix('v').unwrap_or(text);
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, "0"),
        };

        let major = major.parse::<u16>().map_err(|_| invalid())?;
        let minor = minor.parse::<u16>().map_err(|_| invalid())?;

        Ok(VersionSpec::exact(major, minor))
    }

    /// Whether a discovered `major.minor` satisfies this constraint.
    pub fn matches(&self, major: u16, minor: u16) -> bool {
        !self.specified || (self.major == major && self.minor == minor)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Fields every wrapper understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseArgs {
    pub compiler_version: VersionSpec,
    pub sdk_version: VersionSpec,
    /// Raw `-m` suffix, e.g. `amd64`, `arm`, `ce`, `woa`.
    pub architecture: Option<String>,
    pub static_crt: bool,
    pub library_paths: Vec<String>,
    pub libraries: Vec<String>,
}

/// Try to consume a base flag at the head of `args`.
///
/// Returns the number of tokens consumed; `0` means the head token is not a
/// base flag.
pub fn parse_base_arg(base: &mut BaseArgs, args: &[String]) -> Result<usize> {
    let Some(arg) = args.first() else {
        return Ok(0);
    };

    match arg.as_str() {
        "-V" => {
            let value = operand(args, "-V")?;
            base.compiler_version = VersionSpec::parse(value)?;
            return Ok(2);
        }
        "-sdkversion" => {
            let value = operand(args, "-sdkversion")?;
            base.sdk_version = VersionSpec::parse(value)?;
            return Ok(2);
        }
        "-static-crt" => {
            base.static_crt = true;
            return Ok(1);
        }
        _ => {}
    }

    if let Some(arch) = arg.strip_prefix("-m") {
        base.architecture = Some(arch.to_string());
    } else if let Some(path) = arg.strip_prefix("-L") {
        base.library_paths.push(path.to_string());
    } else if let Some(name) = arg.strip_prefix("-l") {
        base.libraries.push(name.to_string());
    } else {
        return Ok(0);
    }

    Ok(1)
}

/// The token following `flag`, or an error if the command line ends first.
pub(crate) fn operand<'a>(args: &'a [String], flag: &str) -> Result<&'a str> {
    args.get(1)
        .map(String::as_str)
        .ok_or_else(|| ClwrapError::invalid_argument(format!("{} expects an argument", flag)))
}
