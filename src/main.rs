//! Fcmdr CLI application entry point
//!
//! This is the main executable for fcmdr, a natural-language file
//! management tool. Commands written in plain English are interpreted into
//! structured operation plans and executed against the filesystem.
//!
//! # Usage
//!
//! ```bash
//! # Run a command (quoting optional)
//! fcmdr run create folder reports on desktop
//! fcmdr r "move budget.xlsx from downloads to documents"
//! fcmdr r play movie inception
//!
//! # Multi-step commands execute in order, continuing past failures
//! fcmdr r "create folder movies on desktop, then create folder hollywood inside it"
//!
//! # List the known location names
//! fcmdr locations
//!
//! # Quiet mode (only output results)
//! fcmdr -q run search for budget files in documents
//! ```
//!
//! # Configuration
//!
//! On first run, fcmdr will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/fcmdr/config.toml` on
//! Linux). The OpenRouter API key is read from `OPENROUTER_API_KEY`,
//! optionally via a `.env` file.

use colored::Colorize;
use fcmdr::{
    FcmdrError,
    cli::{Cli, Commands, ConfigCommands},
    config::FcmdrConfig,
    interpreter::{CommandInterpreter, OpenRouterInterpreter},
    launcher::SystemLauncher,
    locations::AliasTable,
    ops::Executor,
    output, runner,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, FcmdrError>;

/// Handle the run command - interpret and execute a natural language command
///
/// Sends the command text to the interpreter, executes the resulting plan
/// step by step, and prints one result line per step.
///
/// # Errors
///
/// Returns `FcmdrError` if the command text is empty, the API key is
/// missing, or the interpreter cannot produce a plan. Individual step
/// failures are reported in the output, not as errors.
fn handle_run_command(
    config: &FcmdrConfig,
    words: &[String],
    model_override: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let command_text = words.join(" ");
    if command_text.trim().is_empty() {
        return Err(FcmdrError::InvalidInput("No command provided".into()));
    }

    if !quiet {
        println!("{} {command_text}", "Command:".bold().cyan());
    }

    let model = model_override.unwrap_or(&config.model);
    let interpreter = OpenRouterInterpreter::new(model)?;
    let plan = interpreter.interpret(&command_text)?;

    let aliases = AliasTable::from_platform(config.movies_dir.as_deref());
    let current_path = current_location()?;
    let launcher = SystemLauncher;
    let executor = Executor::new(&aliases, current_path, &launcher);

    let results = runner::run_plan(&executor, &plan);
    output::print_step_results(&results, quiet);

    Ok(())
}

/// The location used when an operation omits its own
///
/// The home directory, falling back to the process working directory when
/// the platform cannot name one.
fn current_location() -> Result<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Ok(home),
        None => Ok(std::env::current_dir()?),
    }
}

/// Handle the locations command - list the alias table
fn handle_locations_command(config: &FcmdrConfig, quiet: bool) -> Result<()> {
    let aliases = AliasTable::from_platform(config.movies_dir.as_deref());

    if !quiet {
        println!("Known locations:");
    }

    for (name, path) in aliases.entries() {
        if quiet {
            println!("{name}");
        } else {
            println!("  {} -> {}", name, path.display());
        }
    }

    Ok(())
}

/// Handle the config command - manage application settings
///
/// # Errors
///
/// Returns `FcmdrError` if the configuration key is invalid, value parsing
/// fails, or configuration save fails.
fn handle_config_command(
    mut config: FcmdrConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(FcmdrError::InvalidInput(
                    "Invalid format. Use: fcmdr config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "model" => {
                    config.model = value.to_string();
                    config.save()?;
                    if !quiet {
                        println!("Set model = {value}");
                    }
                }
                "movies_dir" => {
                    config.movies_dir = (!value.is_empty()).then(|| PathBuf::from(value));
                    config.save()?;
                    if !quiet {
                        println!("Set movies_dir = {value}");
                    }
                }
                "quiet" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        FcmdrError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.quiet = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set quiet = {new_value}");
                    }
                }
                _ => {
                    return Err(FcmdrError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: model, movies_dir, quiet"
                    )));
                }
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "model" => println!("{}", config.model),
            "movies_dir" => match &config.movies_dir {
                Some(dir) => println!("{}", dir.display()),
                None => println!("(default)"),
            },
            "quiet" => println!("{}", config.quiet),
            _ => {
                return Err(FcmdrError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: model, movies_dir, quiet"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the fcmdr application
///
/// Loads environment and configuration, parses command-line arguments, and
/// dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `FcmdrError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    // A missing .env file is fine; the environment may carry the key
    let _ = dotenvy::dotenv();

    let config = FcmdrConfig::load_or_setup()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Run { command, model } => {
            handle_run_command(&config, command, model.as_deref(), quiet)?;
        }
        Commands::Locations => {
            handle_locations_command(&config, quiet)?;
        }
        Commands::Config { command } => {
            handle_config_command(config, command, quiet)?;
        }
    }

    Ok(())
}
