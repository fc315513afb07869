//! Natural-language command interpretation boundary
//!
//! The core never talks to a language model directly: it sees only the
//! [`CommandInterpreter`] trait, which turns free text into a [`Plan`] or a
//! parse failure. The shipped implementation calls OpenRouter; tests use
//! canned interpreters and never touch the network.

mod openrouter;

pub use openrouter::OpenRouterInterpreter;

use crate::plan::Plan;
use thiserror::Error;

/// Interpreter-specific errors
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The interpreter endpoint could not be reached or answered non-2xx
    #[error("Request to interpreter failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The response carried no usable content
    #[error("Interpreter returned an empty response")]
    EmptyResponse,

    /// The response content was not a recognizable plan
    #[error("Could not parse plan from interpreter response: {0}")]
    PlanError(#[from] serde_json::Error),

    /// Missing API credentials
    #[error("OPENROUTER_API_KEY is not set. Add it to your environment or .env file.")]
    MissingApiKey,
}

/// Turns a natural-language command into an operation plan
pub trait CommandInterpreter {
    /// Interpret one command
    ///
    /// # Errors
    ///
    /// Returns `InterpreterError` if the backing service cannot be reached
    /// or its reply cannot be parsed into a plan.
    fn interpret(&self, command: &str) -> Result<Plan, InterpreterError>;
}

/// Extract the JSON payload from a model reply
///
/// Models sometimes wrap the plan in markdown code fences or surround it
/// with prose. Tries, in order: the raw text, the text with fences
/// stripped, and the outermost brace-delimited object.
#[must_use]
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return trimmed;
    }

    let unfenced = strip_code_fences(trimmed);
    if unfenced.starts_with('{') && unfenced.ends_with('}') {
        return unfenced;
    }

    outermost_object(trimmed).unwrap_or(trimmed)
}

/// Remove a leading ```/```json fence and its closing fence
fn strip_code_fences(text: &str) -> &str {
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text)
        .trim();
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Find the outermost `{...}` span by brace counting
fn outermost_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut start = None;

    for (i, ch) in text.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0
                    && let Some(s) = start
                {
                    return Some(&text[s..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Operation;

    #[test]
    fn test_extract_bare_json() {
        let raw = r#"{"operation": "create_folder", "parameters": {}}"#;
        assert_eq!(extract_json(raw), raw);
    }

    #[test]
    fn test_extract_fenced_json() {
        let fenced = "```json\n{\"operation\": \"create_folder\", \"parameters\": {}}\n```";
        assert_eq!(
            extract_json(fenced),
            "{\"operation\": \"create_folder\", \"parameters\": {}}"
        );
    }

    #[test]
    fn test_extract_fenced_without_language_tag() {
        let fenced = "```\n{\"operation\": \"unknown\"}\n```";
        assert_eq!(extract_json(fenced), "{\"operation\": \"unknown\"}");
    }

    #[test]
    fn test_extract_json_surrounded_by_prose() {
        let chatty = "Here is the plan you asked for:\n{\"operation\": \"play_movie\", \"parameters\": {\"movie_name\": \"Up\"}}\nLet me know if that works.";
        assert_eq!(
            extract_json(chatty),
            "{\"operation\": \"play_movie\", \"parameters\": {\"movie_name\": \"Up\"}}"
        );
    }

    #[test]
    fn test_fenced_reply_parses_like_bare_json() {
        let fenced = "```json\n{\"operation\": \"create_file\", \"parameters\": {\"file_name\": \"a.txt\"}}\n```";
        let plan: Plan =
            Plan::from_value(serde_json::from_str(extract_json(fenced)).unwrap()).unwrap();

        assert_eq!(
            plan,
            Plan::Single(Operation::CreateFile {
                file_name: "a.txt".into(),
                location: String::new(),
                content: String::new(),
            })
        );
    }
}
