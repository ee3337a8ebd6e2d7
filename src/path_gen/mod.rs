//! Path generation module
//!
//! This module contains components for computing the destination path of each
//! file by literal substring replacement.

mod rename;

pub use rename::{RenamePair, generate_name, generate_rename_pairs};
