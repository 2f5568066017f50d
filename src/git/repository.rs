//! Repository checks and staged diff collection.

use std::fmt;

use tracing::debug;

use crate::error::GitError;

use super::process::GitExecutor;

/// Text of the staged changes, as printed by `git diff --cached`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diff(String);

impl Diff {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const STAGED_DIFF_ARGS: [&str; 4] = ["diff", "--cached", "--no-ext-diff", "--no-color"];

/// Check whether the executor's working directory is inside a git work tree.
///
/// Any failure, including git not being installed, counts as "no".
pub fn is_repository<G: GitExecutor + ?Sized>(git: &G) -> bool {
    match git.run(&["rev-parse", "--is-inside-work-tree"], None) {
        Ok(output) => output.success() && output.stdout.trim() == "true",
        Err(e) => {
            debug!("git rev-parse failed: {e}");
            false
        }
    }
}

/// Fetch the diff of staged changes.
///
/// Returns an empty [`Diff`] when nothing is staged. External diff drivers
/// and color are turned off so the output is always a plain patch.
pub fn get_staged_diff<G: GitExecutor + ?Sized>(git: &G) -> Result<Diff, GitError> {
    let output = git.run(&STAGED_DIFF_ARGS, None)?.into_result()?;
    debug!("Staged diff: {} bytes", output.stdout.len());
    Ok(Diff(output.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::process::ProcessOutput;

    /// Executor that replies with a fixed output and ignores arguments.
    struct Canned(Result<ProcessOutput, fn() -> GitError>);

    impl GitExecutor for Canned {
        fn run(&self, _args: &[&str], _stdin: Option<&str>) -> Result<ProcessOutput, GitError> {
            match &self.0 {
                Ok(out) => Ok(out.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn output(code: i32, stdout: &str) -> Canned {
        Canned(Ok(ProcessOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: if code == 0 { String::new() } else { "fatal: boom".to_string() },
        }))
    }

    #[test]
    fn test_is_repository_true() {
        assert!(is_repository(&output(0, "true\n")));
    }

    #[test]
    fn test_is_repository_false_inside_git_dir() {
        // rev-parse prints "false" inside .git itself
        assert!(!is_repository(&output(0, "false\n")));
    }

    #[test]
    fn test_is_repository_false_on_non_zero_exit() {
        assert!(!is_repository(&output(128, "")));
    }

    #[test]
    fn test_is_repository_false_when_git_missing() {
        let git = Canned(Err(|| {
            GitError::SpawnFailed(std::io::Error::new(std::io::ErrorKind::NotFound, "git"))
        }));
        assert!(!is_repository(&git));
    }

    #[test]
    fn test_get_staged_diff_returns_text() {
        let diff = get_staged_diff(&output(0, "+fn foo() {}\n")).unwrap();
        assert_eq!(diff.as_str(), "+fn foo() {}\n");
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_get_staged_diff_empty() {
        let diff = get_staged_diff(&output(0, "")).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_get_staged_diff_propagates_failure() {
        let result = get_staged_diff(&output(128, ""));
        assert!(matches!(
            result,
            Err(GitError::NonZeroExit { code: Some(128), .. })
        ));
    }

    #[test]
    fn test_get_staged_diff_requests_plain_patch() {
        struct Recorder(std::cell::RefCell<Vec<String>>);

        impl GitExecutor for Recorder {
            fn run(&self, args: &[&str], _stdin: Option<&str>) -> Result<ProcessOutput, GitError> {
                self.0.borrow_mut().extend(args.iter().map(|a| a.to_string()));
                Ok(ProcessOutput {
                    code: Some(0),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            }
        }

        let git = Recorder(std::cell::RefCell::new(Vec::new()));
        get_staged_diff(&git).unwrap();
        assert_eq!(*git.0.borrow(), ["diff", "--cached", "--no-ext-diff", "--no-color"]);
    }

    #[test]
    fn test_whitespace_only_diff_is_empty() {
        assert!(Diff::new("\n  \n").is_empty());
    }
}
