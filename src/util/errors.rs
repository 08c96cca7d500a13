//! Error types shared by the wrappers.

use miette::Diagnostic;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = ClwrapError> = std::result::Result<T, E>;

/// Failure anywhere in parsing, discovery, selection, path construction or launch.
///
/// A launched tool that exits with a nonzero status is *not* an error; its
/// exit code is handed back to the caller untouched.
#[derive(Debug, Error, Diagnostic)]
pub enum ClwrapError {
    #[error("{0}")]
    #[diagnostic(code(clwrap::invalid_argument))]
    InvalidArgument(String),

    #[error("{what}")]
    #[diagnostic(code(clwrap::not_found))]
    NotFound {
        what: String,
        #[help]
        help: Option<String>,
    },

    #[error("failed to launch `{program}`")]
    #[diagnostic(
        code(clwrap::launch),
        help("check that the toolchain installation is intact")
    )]
    ExternalToolFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("registry query failed for `{key}`: {message}")]
    #[diagnostic(code(clwrap::registry))]
    Registry { key: String, message: String },

    #[error("invalid configuration in {path}: {message}")]
    #[diagnostic(code(clwrap::config))]
    Config { path: String, message: String },

    #[error("I/O error on {path}")]
    #[diagnostic(code(clwrap::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ClwrapError {
    /// Shorthand for an [`ClwrapError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ClwrapError::InvalidArgument(message.into())
    }

    /// Shorthand for a [`ClwrapError::NotFound`] without a help line.
    pub fn not_found(what: impl Into<String>) -> Self {
        ClwrapError::NotFound {
            what: what.into(),
            help: None,
        }
    }

    /// Attach a help line to a `NotFound` error; other kinds are returned as-is.
    pub fn with_help(self, text: impl Into<String>) -> Self {
        match self {
            ClwrapError::NotFound { what, .. } => ClwrapError::NotFound {
                what,
                help: Some(text.into()),
            },
            other => other,
        }
    }

    /// Process exit code the binaries use for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClwrapError::InvalidArgument(_) => 2,
            ClwrapError::NotFound { .. } => 3,
            ClwrapError::ExternalToolFailure { .. } => 4,
            ClwrapError::Registry { .. } | ClwrapError::Config { .. } | ClwrapError::Io { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let invalid = ClwrapError::invalid_argument("-c conflicts with -shared");
        let missing = ClwrapError::not_found("Could not find SDK v8.1");
        let launch = ClwrapError::ExternalToolFailure {
            program: "cl.exe".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(launch.exit_code(), 4);
    }

    #[test]
    fn test_with_help_only_touches_not_found() {
        let err = ClwrapError::not_found("No applicable SDK found").with_help("install one");
        assert_eq!(err.help().map(|h| h.to_string()), Some("install one".to_string()));

        let err = ClwrapError::invalid_argument("bad").with_help("ignored");
        assert!(err.help().is_none());
    }
}
