use std::fmt;
use std::process::Command;

/// A subprocess that did not produce usable output: it either failed to
/// spawn or exited non-zero. Carries whatever the command said on stderr.
#[derive(Debug, Clone)]
pub struct CommandFailure {
    pub program: String,
    pub status: Option<i32>,
    pub stderr: String,
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "`{}` exited with status {}", self.program, code)?,
            None => write!(f, "`{}` failed to run", self.program)?,
        }
        if !self.stderr.is_empty() {
            write!(f, ": {}", self.stderr)?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandFailure {}

/// Seam for everything the charm shells out to, hook tools included.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits. Returns captured
    /// stdout on success.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandFailure>;
}

/// Real runner backed by blocking `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandFailure> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CommandFailure {
                program: program.to_string(),
                status: None,
                stderr: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(CommandFailure {
                program: program.to_string(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
