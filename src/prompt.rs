//! Prompt construction for commit message generation.

use std::fmt;

use crate::git::Diff;

/// Maximum bytes of diff text included in the prompt.
pub const MAX_DIFF_LENGTH: usize = 30_000;

/// Options that shape the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    /// Natural language the model should answer in. Passed through as-is.
    pub language: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            language: crate::config::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Rendered prompt text sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the prompt asking for a single commit message describing `diff`.
///
/// Deterministic: the same diff and options always give the same text.
pub fn build_prompt(diff: &Diff, options: &PromptOptions) -> Prompt {
    let (diff_text, truncated) = sanitize_diff(diff.as_str(), MAX_DIFF_LENGTH);

    let truncation_note = if truncated {
        "\n\nNote: The diff was truncated due to size. Focus on the visible changes."
    } else {
        ""
    };

    Prompt(format!(
        r#"You are writing a Git commit message for the staged changes below.

## Diff
```
{diff_text}
```{truncation_note}

## Rules
- Write the message in {language}.
- First line: a concise summary in imperative mood ("Add", "Fix", "Remove"), at most 72 characters, no period at the end.
- If the change needs explaining, add a blank line and a short body that says why the change was made, wrapped at 72 characters.
- Describe only what the diff shows. Do not invent changes.
- Do not use markdown, code fences, quotes or any commentary.

Respond with ONLY the commit message."#,
        language = options.language,
    ))
}

/// Clean diff text for inclusion in a prompt.
///
/// Drops control characters (keeping newlines and tabs) and ANSI escape
/// sequences, then truncates to `max_len` bytes on a char boundary. Returns the
/// cleaned text and whether it was truncated.
pub fn sanitize_diff(text: &str, max_len: usize) -> (String, bool) {
    let mut result = remove_ansi_escapes(text);
    result.retain(|c| !c.is_control() || c == '\n' || c == '\t');

    if result.len() <= max_len {
        return (result, false);
    }

    let mut end = max_len;
    while end > 0 && !result.is_char_boundary(end) {
        end -= 1;
    }
    result.truncate(end);
    (result, true)
}

/// Strip CSI escape sequences such as `\x1b[31m`.
fn remove_ansi_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in @..~
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
        }
    }

    out
}
