//! OpenRouter-backed command interpreter
//!
//! Sends the operation-catalog system prompt plus the user's command to an
//! OpenRouter chat model and parses the JSON plan out of the reply. The
//! call is synchronous; one command, one request.

use super::{CommandInterpreter, InterpreterError, extract_json};
use crate::plan::Plan;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const SYSTEM_PROMPT: &str = r#"You are a file system command interpreter. Parse the natural language command below into a structured format.

Based on the command, identify the operation(s) and parameters. The possible operations are:
1. create_folder - Parameters: folder_name, location (optional)
2. create_file - Parameters: file_name, location (optional), content (optional)
3. rename_item - Parameters: old_name, new_name, location (optional)
4. move_item - Parameters: source, destination
5. move_all_files - Parameters: source_dir, destination_dir
6. open_file_explorer - Parameters: location (optional)
7. search_files - Parameters: search_term, search_path (optional)
8. play_movie - Parameters: movie_name

The command may contain multiple operations that need to be performed in sequence.
If it's a single operation, output a JSON object with the operation and parameters:
{"operation": "create_folder", "parameters": {"folder_name": "reports", "location": "Desktop"}}

If the command contains multiple sequential operations, output a JSON object with an "operations" array:
{"has_multiple_operations": true, "operations": [{"operation": "create_folder", "parameters": {...}}, ...]}

If the command is unclear, return:
{"operation": "unknown", "parameters": {}}

Always return only the JSON without any markdown formatting or code blocks."#;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// Interpreter that calls an OpenRouter chat model
pub struct OpenRouterInterpreter {
    client: Client,
    model: String,
    api_key: String,
}

impl OpenRouterInterpreter {
    /// Create an interpreter for the given model, reading the API key from
    /// the `OPENROUTER_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns `InterpreterError::MissingApiKey` if the variable is unset
    /// or empty.
    pub fn new(model: impl Into<String>) -> Result<Self, InterpreterError> {
        let api_key =
            std::env::var("OPENROUTER_API_KEY").map_err(|_| InterpreterError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(InterpreterError::MissingApiKey);
        }
        Ok(Self::with_api_key(model, api_key))
    }

    /// Create an interpreter with an explicit API key
    #[must_use]
    pub fn with_api_key(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

impl CommandInterpreter for OpenRouterInterpreter {
    fn interpret(&self, command: &str) -> Result<Plan, InterpreterError> {
        let user_content = format!("Command: {command}");
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: &user_content,
                },
            ],
            temperature: 0.0,
        };

        let response: ChatResponse = self
            .client
            .post(ENDPOINT)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.trim())
            .filter(|content| !content.is_empty())
            .ok_or(InterpreterError::EmptyResponse)?;

        let value = serde_json::from_str(extract_json(content))?;
        Ok(Plan::from_value(value)?)
    }
}
