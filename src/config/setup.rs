//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when fcmdr is run for the first time.

use super::{DEFAULT_MODEL, FcmdrConfig};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for model and movies location
///
/// Guides the user through the initial configuration:
/// 1. Prompts for the interpreter model (default: the shipped model)
/// 2. Prompts for the movies directory (default: `<home>/Movies`)
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The home directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<FcmdrConfig, ConfigError> {
    println!("Welcome to fcmdr! Let's set up your configuration.\n");

    let home = dirs::home_dir()
        .ok_or_else(|| ConfigError::Message("Could not determine home directory".to_string()))?;

    let model: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Interpreter model")
        .default(DEFAULT_MODEL.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let default_movies = home.join("Movies");
    let movies_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Movies directory")
        .default(default_movies.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let movies_dir = PathBuf::from(movies_str);

    let config = FcmdrConfig {
        model,
        movies_dir: (movies_dir != default_movies).then_some(movies_dir),
        quiet: false,
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    println!("Remember to set OPENROUTER_API_KEY in your environment or .env file.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_module_compiles() {
        // Ensures the module compiles and the function signature is correct
        let _: fn() -> Result<FcmdrConfig, ConfigError> = first_time_setup;
    }
}
