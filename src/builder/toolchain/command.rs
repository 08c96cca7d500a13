//! Command representation and rendering to a Windows command line.

use crate::util::errors::Result;
use crate::util::process::ProcessBuilder;

/// One command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Emitted exactly as written.
    Plain(String),
    /// A flag carrying a path, emitted as `prefix"path"`.
    Path { prefix: String, path: String },
}

impl Arg {
    /// The argument as it appears on a Windows command line.
    pub fn render(&self) -> String {
        match self {
            Arg::Plain(text) => text.clone(),
            Arg::Path { prefix, path } => format!("{}\"{}\"", prefix, path),
        }
    }

    /// The argument value after command-line unquoting.
    pub fn value(&self) -> String {
        match self {
            Arg::Plain(text) => text.clone(),
            Arg::Path { prefix, path } => format!("{}{}", prefix, path),
        }
    }
}

/// A command to execute: program, arguments, and a directory to put on the
/// child's search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to run (a Windows path)
    pub program: String,
    /// Command arguments
    pub args: Vec<Arg>,
    /// Directory prepended to the child's `PATH`
    pub search_path: Option<String>,
}

impl CommandSpec {
    /// Create a new command spec.
    pub fn new(program: impl Into<String>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
            search_path: None,
        }
    }

    /// Add an unquoted argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg::Plain(arg.into()));
        self
    }

    /// Add multiple unquoted arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| Arg::Plain(a.into())));
        self
    }

    /// Add a path-bearing flag; the path is always quoted.
    pub fn path_arg(mut self, prefix: impl Into<String>, path: impl Into<String>) -> Self {
        self.args.push(Arg::Path {
            prefix: prefix.into(),
            path: path.into(),
        });
        self
    }

    /// Put `dir` on the child's search path.
    pub fn search_path(mut self, dir: impl Into<String>) -> Self {
        self.search_path = Some(dir.into());
        self
    }

    /// The full command line, program quoted, arguments separated by one space.
    pub fn command_line(&self) -> String {
        let mut line = CommandLine::new();
        line.push_quoted(&self.program);
        for arg in &self.args {
            line.push(&arg.render());
        }
        line.into_string()
    }

    /// Prepare a process for this command.
    ///
    /// On Windows the rendered (quoted) arguments are handed to the child
    /// verbatim; elsewhere each argument's unquoted value is passed.
    pub fn to_process(&self) -> Result<ProcessBuilder> {
        let program = crate::util::fs::native_path(&self.program);

        let process = if cfg!(windows) {
            ProcessBuilder::new(program)
                .args(self.args.iter().map(Arg::render))
                .verbatim(true)
        } else {
            ProcessBuilder::new(program).args(self.args.iter().map(Arg::value))
        };

        match self.search_path {
            Some(ref dir) => process.prepend_path(dir),
            None => Ok(process),
        }
    }
}

/// Growable buffer the command line is assembled in.
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    buffer: String,
}

impl CommandLine {
    pub fn new() -> Self {
        CommandLine::default()
    }

    /// Append one item, separated from the previous one by a single space.
    pub fn push(&mut self, item: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
        self.buffer.push_str(item);
    }

    /// Append `"item"`.
    pub fn push_quoted(&mut self, item: &str) {
        self.push(&format!("\"{}\"", item));
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_quotes_program_and_paths_only() {
        let cmd = CommandSpec::new(r"C:\VS\VC\bin\cl.exe")
            .arg("/nologo")
            .path_arg("/I", r"C:\My Includes")
            .arg("/DNAME=1")
            .args(["a.c", "b.c"]);

        assert_eq!(
            cmd.command_line(),
            r#""C:\VS\VC\bin\cl.exe" /nologo /I"C:\My Includes" /DNAME=1 a.c b.c"#
        );
    }

    #[test]
    fn test_arg_value_drops_quotes() {
        let arg = Arg::Path {
            prefix: "/LIBPATH:".to_string(),
            path: r"C:\Lib Dir".to_string(),
        };
        assert_eq!(arg.render(), r#"/LIBPATH:"C:\Lib Dir""#);
        assert_eq!(arg.value(), r"/LIBPATH:C:\Lib Dir");
    }

    #[test]
    fn test_command_line_buffer() {
        let mut line = CommandLine::new();
        line.push("a");
        line.push_quoted("b c");
        line.push("d");
        assert_eq!(line.into_string(), r#"a "b c" d"#);
    }

    #[test]
    fn test_to_process_carries_arguments() {
        let cmd = CommandSpec::new("lib.exe").arg("/nologo").path_arg("/OUT:", "x.lib");
        let process = cmd.to_process().unwrap();

        if cfg!(windows) {
            assert_eq!(process.get_args(), &["/nologo", "/OUT:\"x.lib\""]);
        } else {
            assert_eq!(process.get_args(), &["/nologo", "/OUT:x.lib"]);
        }
    }
}
