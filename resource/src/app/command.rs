//! Command selection
//!
//! Concourse runs `/opt/resource/check`, `/opt/resource/in <dir>` and
//! `/opt/resource/out <dir>`. The binary is installed under all three names,
//! and also accepts the command as its first argument.

use std::path::{Path, PathBuf};

use crate::errors::ResourceError;

/// A resource command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check,
    /// `in`, with the destination directory
    In(PathBuf),
    /// `out`, with the sources directory
    Out(PathBuf),
}

impl Command {
    /// Parse `argv`, program name included
    pub fn from_args(args: &[String]) -> Result<Self, ResourceError> {
        let program = args
            .first()
            .and_then(|arg0| Path::new(arg0).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let (name, rest) = if is_command(program) {
            (program, &args[1..])
        } else {
            match args.get(1) {
                Some(name) => (name.as_str(), &args[2..]),
                None => return Err(usage()),
            }
        };

        match name {
            "check" => Ok(Command::Check),
            "in" => Ok(Command::In(directory_arg(name, rest)?)),
            "out" => Ok(Command::Out(directory_arg(name, rest)?)),
            _ => Err(usage()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Check => "check",
            Command::In(_) => "in",
            Command::Out(_) => "out",
        }
    }
}

fn is_command(name: &str) -> bool {
    matches!(name, "check" | "in" | "out")
}

fn directory_arg(name: &str, rest: &[String]) -> Result<PathBuf, ResourceError> {
    rest.first().map(PathBuf::from).ok_or_else(|| {
        ResourceError::UsageError(format!("{} requires a directory argument", name))
    })
}

fn usage() -> ResourceError {
    ResourceError::UsageError(
        "usage: marathon-resource check | in <destination> | out <sources>".to_string(),
    )
}
