//! Directory scanning functionality
//!
//! This module contains functions for walking a directory tree and finding
//! the files whose names contain a literal substring.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{
    Result, file_operation_error, invalid_filename_error, invalid_root_error,
};
use crate::utils::name_contains;

/// A regular file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The path to the file, relative or absolute depending on the root
    pub path: PathBuf,
    /// The final component of the path, exactly as stored on disk
    pub filename: OsString,
}

impl FileEntry {
    /// Creates a new FileEntry from a path
    ///
    /// # Arguments
    /// * `path` - The path to the file
    ///
    /// # Returns
    /// * `Result<FileEntry>` - The file entry or an error
    ///
    /// # Errors
    /// Returns an error if the path has no final component
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_os_string();

        Ok(FileEntry { path, filename })
    }

    /// Returns true when the filename contains `pattern`
    ///
    /// An empty pattern matches every file.
    pub fn matches(&self, pattern: &str) -> bool {
        name_contains(&self.filename, pattern)
    }
}

/// Checks that `root` exists and is a directory
///
/// # Errors
/// Returns an invalid root error describing which of the two checks failed
pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(invalid_root_error(root.to_path_buf(), "does not exist"));
    }
    if !root.is_dir() {
        return Err(invalid_root_error(root.to_path_buf(), "is not a directory"));
    }
    Ok(())
}

/// Discovers the files under `root` whose name contains `pattern`
///
/// Only direct children are considered when `recursive` is false. Directory
/// symlinks are never followed, so symlink cycles cannot trap the walk; a
/// symlink pointing at a regular file counts as a file. Hidden files are
/// included. The result is sorted by full path.
///
/// # Arguments
/// * `root` - The directory to scan
/// * `pattern` - Optional literal, case-sensitive substring filter
/// * `recursive` - Whether to descend into subdirectories
///
/// # Returns
/// * `Result<Vec<FileEntry>>` - The files found, in deterministic order
///
/// # Errors
/// Returns an error if the root is invalid or cannot be read. Unreadable
/// entries below the root are skipped with a warning.
pub fn discover(root: &Path, pattern: Option<&str>, recursive: bool) -> Result<Vec<FileEntry>> {
    validate_root(root)?;
    debug!(
        "Scanning {} ({})",
        root.display(),
        if recursive { "recursive" } else { "top level only" }
    );

    let pattern = pattern.unwrap_or("");
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let path = e.path().unwrap_or(root).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory loop"));
                return Err(file_operation_error(source, path, "read directory"));
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if !is_regular_file(&entry) {
            continue;
        }

        let file = match FileEntry::new(entry.into_path()) {
            Ok(file) => file,
            Err(e) => {
                warn!("Skipping file: {e}");
                continue;
            }
        };

        if file.matches(pattern) {
            trace!("Found {}", file.path.display());
            files.push(file);
        }
    }

    files.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    debug!("Found {} matching files", files.len());

    Ok(files)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    }
}
