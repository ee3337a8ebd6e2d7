//! File discovery module
//!
//! This module contains components for scanning directory trees and finding files.

mod scanner;

pub use scanner::{FileEntry, discover, validate_root};
