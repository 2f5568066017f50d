//! Yes/no confirmation loop.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::error::PromptError;

/// Shown after any answer other than `y` or `n`.
pub const INVALID_ANSWER_MESSAGE: &str = "Please enter correct value [y/n]";

/// The user's answer to a confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Parse a raw answer line. Only exactly `y` or `n` are accepted; the
    /// line terminator is ignored, other whitespace is not.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim_end_matches(['\r', '\n']) {
            "y" => Some(Decision::Accept),
            "n" => Some(Decision::Reject),
            _ => None,
        }
    }
}

/// Source of interactive answers.
pub trait Prompter {
    /// Show `question` and block until a line of input arrives.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;

    /// Show a short message between questions.
    fn notify(&mut self, message: &str) -> Result<(), PromptError>;
}

/// Ask `question` until the answer is `y` or `n`.
///
/// Invalid answers re-prompt indefinitely and have no other effect.
pub fn confirm<P: Prompter + ?Sized>(
    prompter: &mut P,
    question: &str,
) -> Result<Decision, PromptError> {
    loop {
        let answer = prompter.ask(question)?;
        if let Some(decision) = Decision::parse(&answer) {
            return Ok(decision);
        }
        prompter.notify(INVALID_ANSWER_MESSAGE)?;
    }
}

/// Prompter bound to the process's stdin/stdout.
///
/// Uses a dialoguer prompt on a terminal and plain line reads otherwise.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        if use_terminal_prompt(io::stdin().is_terminal(), io::stderr().is_terminal()) {
            let answer = Input::<String>::new()
                .with_prompt(question.trim_end())
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer);
        }

        let mut stdout = io::stdout();
        write!(stdout, "{question}")?;
        stdout.flush()?;
        read_answer(&mut io::stdin().lock())
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(io::stdout(), "{message}")?;
        Ok(())
    }
}

/// dialoguer reads stdin and draws on stderr, so both must be terminals.
fn use_terminal_prompt(stdin_is_terminal: bool, stderr_is_terminal: bool) -> bool {
    stdin_is_terminal && stderr_is_terminal
}

/// Read one line, treating end of input as [`PromptError::InputClosed`].
fn read_answer<R: BufRead>(reader: &mut R) -> Result<String, PromptError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::InputClosed);
    }
    Ok(line)
}
