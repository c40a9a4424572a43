//! Launcher - hands the output file to a viewer

use std::path::Path;
use std::process::Command;

use crate::core::error::LaunchError;

/// A program (plus leading arguments) that receives the file path as its
/// last argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    program: String,
    args: Vec<String>,
}

impl Opener {
    /// The host's "open with default application" command
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self {
                program: "cmd".to_string(),
                // The empty argument is `start`'s window title
                args: vec!["/C".to_string(), "start".to_string(), String::new()],
            }
        } else if cfg!(target_os = "macos") {
            Self {
                program: "open".to_string(),
                args: Vec::new(),
            }
        } else {
            Self {
                program: "xdg-open".to_string(),
                args: Vec::new(),
            }
        }
    }

    /// Parse a user-supplied command line such as `code -r`.
    /// Returns `None` for a blank command.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the opener on `path` and wait for it to return
    pub fn open(&self, path: &Path) -> Result<(), LaunchError> {
        tracing::debug!(program = %self.program, args = ?self.args, path = %path.display(), "launching viewer");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Status {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}
