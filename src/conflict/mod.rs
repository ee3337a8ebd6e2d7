//! Conflict detection module
//!
//! This module contains the pre-flight check that refuses a rename plan whose
//! destinations collide with existing files or with each other.

mod detector;

pub use detector::{detect_conflicts, target_exists};
