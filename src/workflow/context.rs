//! Workflow context
//!
//! This module defines the options a run starts from and the outcome it ends with.

use std::path::PathBuf;

use crate::file_ops::ExecutionResult;

/// Options for a rename run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// The directory to search
    pub root: PathBuf,
    /// The literal substring to search for
    pub find: String,
    /// The literal replacement
    pub replace: String,
    /// Whether to descend into subdirectories
    pub recursive: bool,
    /// Whether to stop after the preview
    pub dry_run: bool,
    /// Whether to skip the confirmation prompt
    pub assume_yes: bool,
    /// Whether to print a line per successful rename
    pub verbose: bool,
}

impl RenameOptions {
    /// Creates options with the default flags: recursive, interactive, quiet
    pub fn new(root: impl Into<PathBuf>, find: &str, replace: &str) -> Self {
        RenameOptions {
            root: root.into(),
            find: find.to_string(),
            replace: replace.to_string(),
            recursive: true,
            dry_run: false,
            assume_yes: false,
            verbose: false,
        }
    }
}

/// How a run that did not fail ended
#[derive(Debug)]
pub enum RunOutcome {
    /// No file name contained the search string
    NoMatches,
    /// The preview was shown and nothing was applied
    DryRun { planned: usize },
    /// The user declined the confirmation prompt
    Cancelled,
    /// The plan was executed
    Applied(ExecutionResult),
}

impl RunOutcome {
    /// The process exit code for this outcome
    ///
    /// Only an executed plan with at least one failed rename is non-zero.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Applied(result) if !result.is_success() => 1,
            _ => 0,
        }
    }
}
