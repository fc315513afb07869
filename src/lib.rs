//! Fcmdr - natural language file management
//!
//! This library turns structured operation plans into concrete filesystem
//! actions: resolving friendly location names to absolute paths, dispatching
//! a fixed catalog of file operations, and running multi-step plans with
//! per-step results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cli;
pub mod config;
pub mod interpreter;
pub mod launcher;
pub mod locations;
pub mod ops;
pub mod output;
pub mod plan;
pub mod runner;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FcmdrError {
    /// Interpreter error
    #[error("Interpreter error: {0}")]
    InterpreterError(#[from] interpreter::InterpreterError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Outcome record for a single executed operation
///
/// Exactly one of these is produced per plan step, whether the step
/// succeeded or not.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    pub message: String,
    pub succeeded: bool,
}

impl StepResult {
    /// Create a successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            succeeded: true,
        }
    }

    /// Create a failed result
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            succeeded: false,
        }
    }
}
