//! Running the system `git` binary.
//!
//! Every git interaction goes through [`GitExecutor`], which shells out to the
//! user's `git` so their config, hooks and credential setup apply unchanged.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::GitError;

/// Captured result of a finished git process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Convert a failed run into [`GitError::NonZeroExit`].
    pub fn into_result(self) -> Result<ProcessOutput, GitError> {
        if self.success() {
            Ok(self)
        } else {
            Err(GitError::NonZeroExit {
                code: self.code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Something that can run git with arguments and optional stdin.
///
/// A non-zero exit is not an error at this level; callers decide.
pub trait GitExecutor {
    fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<ProcessOutput, GitError>;
}

/// Executor that spawns the real `git` binary.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the current directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            workdir: Some(dir.as_ref().to_path_buf()),
        }
    }
}

impl GitExecutor for SystemGit {
    fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<ProcessOutput, GitError> {
        debug!("Running git {}", args.join(" "));

        let mut command = Command::new("git");
        command
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(GitError::SpawnFailed)?;

        if let Some(input) = stdin {
            // Dropping the handle closes the pipe so git sees EOF.
            if let Some(mut pipe) = child.stdin.take() {
                pipe.write_all(input.as_bytes()).map_err(GitError::StdinFailed)?;
            }
        }

        let output = child.wait_with_output().map_err(GitError::SpawnFailed)?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
