//! Workflow module
//!
//! This module contains components for orchestrating the pipeline and
//! reporting its progress.

mod context;
mod engine;
pub mod report;

pub use context::{RenameOptions, RunOutcome};
pub use engine::{is_confirmation, process_renames, read_confirmation};
