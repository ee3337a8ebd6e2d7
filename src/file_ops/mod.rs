//! File operations module
//!
//! This module contains the executor that applies a rename plan to the filesystem.

mod actions;

pub use actions::{ExecutionResult, RenameFailure, apply_renames, apply_renames_with};
