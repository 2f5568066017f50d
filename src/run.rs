//! The commit pipeline: probe, prompt, generate, confirm, commit.

use std::io::Write;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::RunError;
use crate::gemini::MessageGenerator;
use crate::git::{GitExecutor, commit, get_staged_diff, is_repository};
use crate::interaction::{Decision, Prompter, confirm};
use crate::prompt::{PromptOptions, build_prompt};

/// Question asked before committing.
pub const CONFIRM_QUESTION: &str = "Do you want to commit this message? [y/n] ";

const SEPARATOR: &str = "---------------------------------------";

/// Run one commit attempt.
///
/// Every early exit is an `Err`; `Ok(())` means the commit was created.
/// Nothing is sent to the model unless the directory is a repository with
/// staged changes, and git is only asked to commit after an explicit `y`.
pub async fn run<G, M, P, W>(
    config: &Config,
    git: &G,
    model: &M,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), RunError>
where
    G: GitExecutor + ?Sized,
    M: MessageGenerator + ?Sized,
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    if !is_repository(git) {
        return Err(RunError::NotARepository);
    }

    let diff = get_staged_diff(git)?;
    if diff.is_empty() {
        return Err(RunError::NoChanges);
    }

    let options = PromptOptions {
        language: config.language.clone(),
    };
    let prompt = build_prompt(&diff, &options);
    debug!(
        "Prompt length: {} bytes (language={}, model={})",
        prompt.len(),
        config.language,
        config.model
    );

    say(out, "Generating commit message...")?;

    let message = match model.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("{} returned an empty message", config.provider);
            return Err(RunError::GenerationFailed);
        }
        Err(e) => {
            warn!("{} request failed: {e}", config.provider);
            return Err(RunError::GenerationFailed);
        }
    };

    say(
        out,
        &format!("Here is your commit message:\n{SEPARATOR}\n{message}\n{SEPARATOR}"),
    )?;

    match confirm(prompter, CONFIRM_QUESTION)? {
        Decision::Reject => return Err(RunError::Aborted),
        Decision::Accept => {}
    }

    say(out, "Committing message...")?;
    commit(git, &message)?;
    say(out, "Commit successful!")?;

    Ok(())
}

fn say<W: Write + ?Sized>(out: &mut W, line: &str) -> Result<(), RunError> {
    writeln!(out, "{line}").map_err(RunError::Output)
}
