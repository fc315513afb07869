//! Output formatting for CLI display
//!
//! Step results are colored by outcome; multi-step plans get numbered
//! lines. Search results render as an indexed table of file name and
//! containing directory.

use crate::StepResult;
use colored::Colorize;
use std::path::PathBuf;

/// Print the results of an executed plan
///
/// A single-step plan prints one "Result:" line; multi-step plans print
/// one numbered "Step N:" line per result. Quiet mode drops the labels and
/// prints bare messages.
pub fn print_step_results(results: &[StepResult], quiet: bool) {
    if quiet {
        for result in results {
            println!("{}", result.message);
        }
        return;
    }

    if results.len() == 1 {
        println!("{} {}", "Result:".bold(), colorize(&results[0]));
    } else {
        for (i, result) in results.iter().enumerate() {
            println!(
                "{} {}",
                format!("Step {}:", i + 1).bold(),
                colorize(result)
            );
        }
    }
}

fn colorize(result: &StepResult) -> String {
    if result.succeeded {
        result.message.green().to_string()
    } else {
        result.message.red().to_string()
    }
}

/// Format search matches as an indexed table
///
/// One row per match: index, file name, containing directory.
#[must_use]
pub fn search_table(term: &str, matches: &[PathBuf]) -> String {
    let mut lines = vec![format!("Search results for '{term}':")];

    for (i, path) in matches.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        lines.push(format!("  {:>2}  {:<40} {}", i + 1, name, directory));
    }

    lines.join("\n")
}
