//! Creating the commit.

use tracing::debug;

use crate::error::GitError;

use super::process::GitExecutor;

/// Commit the staged changes with `message`.
///
/// The message goes to `git commit -F -` on stdin, so no shell quoting is
/// involved. Any non-zero exit from git is returned with its stderr as-is.
pub fn commit<G: GitExecutor + ?Sized>(git: &G, message: &str) -> Result<(), GitError> {
    debug!("Committing {} byte message", message.len());
    git.run(&["commit", "-F", "-"], Some(message))?.into_result()?;
    Ok(())
}
