//! Error types for aicommit modules using thiserror.

use thiserror::Error;

/// Errors from resolving startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Please set the Gemini API key in the API_KEY environment variable.")]
    MissingApiKey,
}

/// Errors from running the git binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Failed to write to git stdin: {0}")]
    StdinFailed(#[source] std::io::Error),

    #[error("git exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit { code: Option<i32>, stderr: String },
}

/// Errors from the Gemini API.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Request to Gemini failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned an unreadable response: {0}")]
    InvalidResponse(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

/// Errors from the interactive confirmation prompt.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read answer: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    #[error("Input closed before an answer was given")]
    InputClosed,
}

/// Terminal conditions of a single run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("This is not a git repository.")]
    NotARepository,

    #[error("No changes to commit. Forgot to add files? Try `git add .` and run again.")]
    NoChanges,

    #[error("Sorry, I can't generate a commit message.")]
    GenerationFailed,

    #[error("Commit aborted by user.")]
    Aborted,

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl RunError {
    /// Process exit code for this condition.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
