//! Conversation assembly for the generation backend.
//!
//! Two shapes exist: a fresh page (system + user) and an edit of previously
//! generated code (system + user + a synthetic assistant turn holding the
//! current HTML). The replace flag travels alongside the messages untouched;
//! whether output replaces or appends is the backend's contract.

use crate::Message;

/// Placeholder substituted with the user's input in a system template
pub const USER_INPUT_PLACEHOLDER: &str = "{userInput}";

pub const DEFAULT_SYSTEM_TEMPLATE: &str =
    "userInput: {userInput}\n\nInstructions: Generate full responsive HTML body based on userInput.";

pub const EDIT_SYSTEM_PROMPT: &str = "You are an expert assistant that edits HTML/CSS based on user requests. \
The previous HTML code is included below inside triple backticks as an assistant message. \
Given the user's instruction, produce the complete, updated HTML (only the body content) and wrap it in ```html ... ```. \
Do NOT include any explanation or commentary. \
Do NOT append duplicate sections; modify the existing structure in-place.";

/// Messages ready to forward upstream, plus the mode flag they were built with
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub messages: Vec<Message>,
    pub replace_mode: bool,
}

/// Build the conversation using [`DEFAULT_SYSTEM_TEMPLATE`] for fresh pages.
pub fn build_messages(
    user_input: &str,
    existing_code: Option<&str>,
    replace_mode: bool,
) -> GenerationPlan {
    build_messages_with_template(user_input, existing_code, replace_mode, None)
}

/// Build the conversation, optionally overriding the fresh-page system template.
///
/// Blank `existing_code` counts as absent.
pub fn build_messages_with_template(
    user_input: &str,
    existing_code: Option<&str>,
    replace_mode: bool,
    system_template: Option<&str>,
) -> GenerationPlan {
    let existing_code = existing_code.filter(|code| !code.trim().is_empty());

    let messages = match existing_code {
        Some(code) => vec![
            Message::system(EDIT_SYSTEM_PROMPT),
            Message::user(user_input),
            Message::assistant(fence_html(code)),
        ],
        None => {
            let template = system_template.unwrap_or(DEFAULT_SYSTEM_TEMPLATE);
            vec![
                Message::system(template.replacen(USER_INPUT_PLACEHOLDER, user_input, 1)),
                Message::user(user_input),
            ]
        }
    };

    GenerationPlan {
        messages,
        replace_mode,
    }
}

/// Wrap code in a single ```` ```html ```` fence, removing any fence it already has.
pub fn fence_html(code: &str) -> String {
    format!("```html\n{}\n```", strip_code_fences(code))
}

/// Remove one leading fence (with optional language tag) and one trailing fence.
pub fn strip_code_fences(code: &str) -> &str {
    let mut body = code.trim();

    if let Some(rest) = body.strip_prefix("```") {
        let rest = rest
            .trim_start_matches('`')
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        body = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);
    }

    if let Some(rest) = body.strip_suffix("```") {
        body = rest.trim_end_matches('`').trim_end();
    }

    body
}
