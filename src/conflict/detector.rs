//! Naming conflict detection
//!
//! The check runs before any rename is applied. It is not transactional: the
//! filesystem may still change between detection and execution.

use std::collections::HashSet;
use std::fs::symlink_metadata;
use std::path::Path;

use log::debug;

use crate::path_gen::RenamePair;

/// Returns true when something already occupies `path`
///
/// Broken symlinks count as occupied, since a rename would replace them.
pub fn target_exists(path: &Path) -> bool {
    symlink_metadata(path).is_ok()
}

/// Returns the pairs of `pairs` that are unsafe to execute, in input order
///
/// A pair conflicts when its destination already exists and differs from its
/// source, or when an earlier pair already claimed the same destination. The
/// first pair to claim a destination is never reported.
pub fn detect_conflicts(pairs: &[RenamePair]) -> Vec<RenamePair> {
    let mut claimed: HashSet<&Path> = HashSet::new();
    let mut conflicts = Vec::new();

    for pair in pairs {
        let destination = pair.destination();
        if destination != pair.source() && target_exists(destination) {
            debug!("Destination already exists: {}", destination.display());
            conflicts.push(pair.clone());
        } else if !claimed.insert(destination) {
            debug!("Destination claimed twice: {}", destination.display());
            conflicts.push(pair.clone());
        }
    }

    conflicts
}
