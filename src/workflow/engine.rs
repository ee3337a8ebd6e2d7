//! Workflow engine
//!
//! This module runs the pipeline stages in order and gates execution behind
//! the conflict check and the confirmation prompt.

use std::fs::canonicalize;
use std::io::BufRead;
use std::path::PathBuf;

use log::{debug, info};

use crate::conflict::detect_conflicts;
use crate::constants::CONFIRM_ANSWERS;
use crate::discovery::{discover, validate_root};
use crate::errors::{Result, conflict_error, file_operation_error};
use crate::file_ops::apply_renames_with;
use crate::path_gen::generate_rename_pairs;

use super::context::{RenameOptions, RunOutcome};
use super::report;

/// Runs discovery, planning, conflict detection and execution
///
/// The steps are:
/// 1. Validate and resolve the root directory
/// 2. Find the files whose name contains the search string
/// 3. Plan the renames and print the preview
/// 4. Refuse the whole batch when any destination collides
/// 5. Stop after the preview in dry-run mode
/// 6. Ask for confirmation unless `assume_yes` is set
/// 7. Apply the renames and print the summary
///
/// # Arguments
/// * `options` - Options for the run
/// * `input` - Where the confirmation answer is read from
///
/// # Returns
/// * `Result<RunOutcome>` - How the run ended
///
/// # Errors
/// * Returns an invalid root error if the root is missing or not a directory
/// * Returns a conflict error carrying every conflicting pair
/// * Returns an error if the root cannot be read or the answer cannot be read
pub fn process_renames(options: &RenameOptions, input: &mut dyn BufRead) -> Result<RunOutcome> {
    validate_root(&options.root)?;
    let root = canonicalize(&options.root)
        .map_err(|e| file_operation_error(e, options.root.clone(), "resolve"))?;

    report::print_search_root(&root);
    let files = discover(&root, Some(&options.find), options.recursive)?;
    let pairs = generate_rename_pairs(&files, &options.find, &options.replace)?;
    report::print_preview(&pairs);

    if pairs.is_empty() {
        return Ok(RunOutcome::NoMatches);
    }

    let conflicts = detect_conflicts(&pairs);
    if !conflicts.is_empty() {
        debug!("Refusing batch with {} conflicts", conflicts.len());
        return Err(conflict_error(conflicts));
    }

    if options.dry_run {
        report::print_dry_run_notice();
        return Ok(RunOutcome::DryRun {
            planned: pairs.len(),
        });
    }

    if !options.assume_yes {
        report::print_confirmation_prompt();
        if !read_confirmation(input)? {
            report::print_cancelled();
            return Ok(RunOutcome::Cancelled);
        }
    }

    info!("Applying {} renames", pairs.len());
    report::print_applying();
    let result = apply_renames_with(&pairs, |pair, outcome| {
        report::print_rename_outcome(pair, outcome, options.verbose)
    });
    report::print_summary(&result);

    Ok(RunOutcome::Applied(result))
}

/// Reads one line from `input` and reports whether it confirms
///
/// End of input counts as a refusal.
pub fn read_confirmation(input: &mut dyn BufRead) -> Result<bool> {
    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .map_err(|e| file_operation_error(e, PathBuf::from("<stdin>"), "read from"))?;

    Ok(read > 0 && is_confirmation(&answer))
}

/// True for `y` or `yes`, ignoring case and surrounding whitespace
pub fn is_confirmation(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    CONFIRM_ANSWERS.contains(&answer.as_str())
}
