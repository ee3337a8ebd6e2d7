//! Terminal reporting
//!
//! Everything the tool prints for the user lives here; the pipeline stages
//! only return structured results.

use std::io::{Write, stdout};
use std::path::Path;

use colored::Colorize;

use crate::constants::CONFLICT_PREVIEW_LIMIT;
use crate::errors::{Error, Result};
use crate::file_ops::ExecutionResult;
use crate::path_gen::RenamePair;

const RULE_WIDTH: usize = 80;

/// Announces the directory being scanned
pub fn print_search_root(root: &Path) {
    println!(
        "Searching for files in {}...",
        root.display().to_string().blue()
    );
}

/// Prints every planned rename grouped with its directory
///
/// An empty plan prints the no-match notice instead.
pub fn print_preview(pairs: &[RenamePair]) {
    if pairs.is_empty() {
        println!("{}", "No files match the pattern.".yellow());
        return;
    }

    println!("\n{}", "Preview of changes:".bold());
    println!("{}\n", "─".repeat(RULE_WIDTH).blue());

    for pair in pairs {
        println!("{}", pair.source_name().red());
        println!("  → {}", pair.destination_name().green());
        println!("  {}\n", pair.parent().display().to_string().blue());
    }

    println!(
        "{}",
        format!("Total files to rename: {}", pairs.len()).bold()
    );
}

/// Lists the first few conflicts and counts the rest
pub fn print_conflicts(conflicts: &[RenamePair]) {
    println!(
        "\n{}",
        format!("Warning: Found {} naming conflicts:", conflicts.len())
            .red()
            .bold()
    );
    for pair in conflicts.iter().take(CONFLICT_PREVIEW_LIMIT) {
        println!(
            "  {} {} already exists or would be duplicated",
            "✗".red(),
            pair.destination_name()
        );
    }
    if conflicts.len() > CONFLICT_PREVIEW_LIMIT {
        println!("  ... and {} more", conflicts.len() - CONFLICT_PREVIEW_LIMIT);
    }
    println!(
        "\n{}",
        "Please resolve conflicts before proceeding.".yellow()
    );
}

/// Tells the user that nothing was changed
pub fn print_dry_run_notice() {
    println!("\n{}", "Dry-run mode: No changes were made.".yellow());
}

/// Asks for confirmation without ending the line
pub fn print_confirmation_prompt() {
    print!("\n{} ", "Apply these changes? [y/N]".yellow());
    // A failed flush only delays the prompt text
    let _ = stdout().flush();
}

/// Reports a declined prompt
pub fn print_cancelled() {
    println!("Cancelled.");
}

/// Marks the start of execution
pub fn print_applying() {
    println!("\n{}", "Applying changes...".bold());
}

/// Prints a failed rename, or a successful one when `verbose` is set
pub fn print_rename_outcome(pair: &RenamePair, outcome: &Result<()>, verbose: bool) {
    match outcome {
        Ok(()) if verbose => println!(
            "{} {} → {}",
            "✓".green(),
            pair.source_name(),
            pair.destination_name()
        ),
        Ok(()) => {}
        Err(error) => println!(
            "{} Failed to rename {}: {}",
            "✗".red(),
            pair.source_name(),
            cause(error)
        ),
    }
}

/// Prints the success count, and the failure count when there were failures
pub fn print_summary(result: &ExecutionResult) {
    println!("\n{}", "Summary:".bold());
    println!(
        "  {} Successfully renamed: {}",
        "✓".green(),
        result.success_count
    );
    if !result.is_success() {
        println!("  {} Failed: {}", "✗".red(), result.failure_count());
    }
}

/// Prints an error that ended the run
///
/// Conflicts are part of the report and go to stdout. Every other error,
/// including an invalid root, goes to stderr.
pub fn print_error(error: &Error) {
    match error {
        Error::Conflict { conflicts } => print_conflicts(conflicts),
        other => eprintln!("{}", format!("Error: {other}").red()),
    }
}

fn cause(error: &Error) -> String {
    match error {
        Error::Rename { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
