//! gcc-style compile-and-link arguments.

use crate::util::errors::{ClwrapError, Result};

use super::args::{operand, parse_base_arg, BaseArgs};

/// What the compiler invocation produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputType {
    #[default]
    Executable,
    SharedLibrary,
    ObjectFile,
}

impl OutputType {
    /// Whether the link stage runs for this output.
    pub fn links(&self) -> bool {
        !matches!(self, OutputType::ObjectFile)
    }
}

/// Level requested with `-O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimization {
    /// `-Os`
    Size,
    /// `-O0` through `-O9`
    Level(u8),
}

impl Optimization {
    fn parse(level: &str) -> Result<Self> {
        let mut chars = level.chars();
        match (chars.next(), chars.next()) {
            (Some('s'), None) => Ok(Optimization::Size),
            (Some(c @ '0'..='9'), None) => Ok(Optimization::Level(c as u8 - b'0')),
            _ => Err(ClwrapError::invalid_argument(format!(
                "Unrecognized optimization: {}",
                level
            ))),
        }
    }
}

/// A parsed compiler command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CcArgs {
    pub base: BaseArgs,
    pub output_type: OutputType,
    pub output_name: Option<String>,
    pub optimization: Option<Optimization>,
    pub warn_all: bool,
    pub warn_as_error: bool,
    pub disable_rtti: bool,
    pub macros: Vec<String>,
    pub include_paths: Vec<String>,
    pub linker_options: Vec<String>,
    pub inputs: Vec<String>,
}

impl CcArgs {
    /// Parse a full command line (without the program name).
    ///
    /// Tokens that match no flag become inputs; only recognized flags with bad
    /// operands are errors, and the first one stops parsing.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut cc = CcArgs::default();
        let mut rest = args;

        while let Some(arg) = rest.first() {
            let consumed = cc.parse_arg(rest)?;
            if consumed == 0 {
                tracing::trace!("passing through input `{}`", arg);
                cc.inputs.push(arg.clone());
                rest = &rest[1..];
            } else {
                rest = &rest[consumed..];
            }
        }

        Ok(cc)
    }

    /// Try to consume one flag at the head of `args`; base flags take priority.
    pub fn parse_arg(&mut self, args: &[String]) -> Result<usize> {
        let consumed = parse_base_arg(&mut self.base, args)?;
        if consumed > 0 {
            return Ok(consumed);
        }

        let Some(arg) = args.first() else {
            return Ok(0);
        };

        match arg.as_str() {
            "-shared" => {
                self.set_output_type(OutputType::SharedLibrary)?;
                return Ok(1);
            }
            "-c" => {
                self.set_output_type(OutputType::ObjectFile)?;
                return Ok(1);
            }
            "-o" => {
                self.output_name = Some(operand(args, "-o")?.to_string());
                return Ok(2);
            }
            "-Wall" => {
                self.warn_all = true;
                return Ok(1);
            }
            "-Werror" => {
                self.warn_as_error = true;
                return Ok(1);
            }
            "-pthread" => return Ok(1),
            "-fno-rtti" => {
                self.disable_rtti = true;
                return Ok(1);
            }
            _ => {}
        }

        if let Some(def) = arg.strip_prefix("-D") {
            self.macros.push(def.to_string());
        } else if let Some(path) = arg.strip_prefix("-I") {
            self.include_paths.push(path.to_string());
        } else if let Some(level) = arg.strip_prefix("-O") {
            self.optimization = Some(Optimization::parse(level)?);
        } else if let Some(options) = arg.strip_prefix("-Wl,") {
            self.linker_options.extend(
                options
                    .split(',')
                    .filter(|o| !o.is_empty())
                    .map(str::to_string),
            );
        } else if let Some(name) = arg.strip_prefix("-o") {
            self.output_name = Some(name.to_string());
        } else {
            return Ok(0);
        }

        Ok(1)
    }

    fn set_output_type(&mut self, requested: OutputType) -> Result<()> {
        let conflict = match (self.output_type, requested) {
            (OutputType::ObjectFile, OutputType::SharedLibrary) => Some("-shared conflicts with -c"),
            (OutputType::SharedLibrary, OutputType::ObjectFile) => Some("-c conflicts with -shared"),
            _ => None,
        };

        if let Some(message) = conflict {
            return Err(ClwrapError::invalid_argument(message));
        }

        self.output_type = requested;
        Ok(())
    }
}
