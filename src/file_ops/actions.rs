//! Rename execution
//!
//! This module applies a conflict-free plan one rename at a time. A failed
//! rename is recorded and the batch carries on; nothing is rolled back.

use std::fs::rename;
use std::io;

use log::{debug, warn};

use crate::conflict::target_exists;
use crate::errors::{Error, Result, rename_error};
use crate::path_gen::RenamePair;

/// A rename that could not be applied
#[derive(Debug)]
pub struct RenameFailure {
    /// The pair that failed
    pub pair: RenamePair,
    /// The error encountered
    pub error: Error,
}

/// The tally of an executed plan
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// Number of renames that succeeded
    pub success_count: usize,
    /// Renames that failed, in execution order
    pub failures: Vec<RenameFailure>,
}

impl ExecutionResult {
    /// Number of renames that failed
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of renames attempted
    pub fn total(&self) -> usize {
        self.success_count + self.failures.len()
    }

    /// True when every attempted rename succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Applies every pair in order without notifying anyone
pub fn apply_renames(pairs: &[RenamePair]) -> ExecutionResult {
    apply_renames_with(pairs, |_, _| {})
}

/// Applies every pair in order, calling `notify` after each attempt
///
/// # Arguments
/// * `pairs` - The plan to execute
/// * `notify` - Called with each pair and the outcome of its rename
///
/// # Returns
/// * `ExecutionResult` - The number of successes and every failure
pub fn apply_renames_with<F>(pairs: &[RenamePair], mut notify: F) -> ExecutionResult
where
    F: FnMut(&RenamePair, &Result<()>),
{
    let mut result = ExecutionResult::default();

    for pair in pairs {
        let outcome = rename_file(pair);
        notify(pair, &outcome);

        match outcome {
            Ok(()) => result.success_count += 1,
            Err(error) => {
                warn!("{error}");
                result.failures.push(RenameFailure {
                    pair: pair.clone(),
                    error,
                });
            }
        }
    }

    debug!(
        "Renamed {} of {} files",
        result.success_count,
        result.total()
    );

    result
}

fn rename_file(pair: &RenamePair) -> Result<()> {
    // rename(2) replaces an existing destination silently
    if pair.destination() != pair.source() && target_exists(pair.destination()) {
        let err = io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists");
        return Err(rename_error(err, pair));
    }

    debug!(
        "Renaming file: {} -> {}",
        pair.source().display(),
        pair.destination().display()
    );
    rename(pair.source(), pair.destination()).map_err(|e| rename_error(e, pair))
}
