//! Arguments for the archive wrapper.

use crate::util::errors::Result;

use super::args::{parse_base_arg, BaseArgs};

/// A parsed librarian command line: base flags plus verbatim inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibArgs {
    pub base: BaseArgs,
    pub inputs: Vec<String>,
}

impl LibArgs {
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut lib = LibArgs::default();
        let mut rest = args;

        while let Some(arg) = rest.first() {
            match parse_base_arg(&mut lib.base, rest)? {
                0 => {
                    lib.inputs.push(arg.clone());
                    rest = &rest[1..];
                }
                n => rest = &rest[n..],
            }
        }

        Ok(lib)
    }
}
