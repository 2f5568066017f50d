//! aicommit - A CLI tool that writes commit messages for staged changes using Gemini.
//!
//! # Overview
//!
//! aicommit reads the staged diff with the system `git`, asks a Gemini model for a
//! concise commit message, shows it, and commits it once the user answers `y`.

pub mod config;
pub mod error;
pub mod gemini;
pub mod git;
pub mod interaction;
pub mod prompt;
pub mod run;

// Re-export commonly used types
pub use config::{Config, Provider};
pub use error::{ConfigError, GeminiError, GitError, PromptError, RunError};
pub use gemini::{GeminiClient, MessageGenerator};
pub use git::{Diff, GitExecutor, ProcessOutput, SystemGit};
pub use interaction::{Decision, Prompter, TerminalPrompter};
pub use prompt::{Prompt, PromptOptions, build_prompt};
pub use run::run;
