//! Rename pair generation
//!
//! This module turns a list of discovered files into the plan of renames
//! obtained by replacing a literal substring in each filename.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::discovery::FileEntry;
use crate::errors::{Result, empty_pattern_error};
use crate::utils::replace_in_name;

/// A planned rename from a source path to a destination path
///
/// Both paths share the same parent directory; only the filename differs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenamePair {
    source: PathBuf,
    destination: PathBuf,
}

impl RenamePair {
    /// Creates a new rename pair
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        RenamePair {
            source,
            destination,
        }
    }

    /// Gets a reference to the source path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Gets a reference to the destination path
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// The filename of the source path, for display
    pub fn source_name(&self) -> Cow<'_, str> {
        display_name(&self.source)
    }

    /// The filename of the destination path, for display
    pub fn destination_name(&self) -> Cow<'_, str> {
        display_name(&self.destination)
    }

    /// The directory both paths live in
    pub fn parent(&self) -> &Path {
        self.source.parent().unwrap_or_else(|| Path::new(""))
    }
}

fn display_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}

/// Replaces every non-overlapping occurrence of `find` in `name`, left to right
///
/// # Examples
/// ```
/// use rnr::path_gen::generate_name;
///
/// assert_eq!(generate_name("test_test_file.txt", "test", "demo"), "demo_demo_file.txt");
/// assert_eq!(generate_name("file_backup.txt", "_backup", ""), "file.txt");
/// ```
pub fn generate_name(name: &str, find: &str, replace: &str) -> String {
    name.replace(find, replace)
}

/// Generates the rename plan for `files`
///
/// Files whose name does not change are left out. Input order is preserved
/// and no filesystem access takes place. Names are rewritten as stored on
/// disk, so on Unix a name that is not valid UTF-8 is renamed like any other.
///
/// # Arguments
/// * `files` - The files to consider
/// * `find` - The literal substring to search for; must not be empty
/// * `replace` - The replacement; may be empty to delete the match
///
/// # Returns
/// * `Result<Vec<RenamePair>>` - The planned renames
///
/// # Errors
/// Returns an error if `find` is empty
pub fn generate_rename_pairs(
    files: &[FileEntry],
    find: &str,
    replace: &str,
) -> Result<Vec<RenamePair>> {
    if find.is_empty() {
        return Err(empty_pattern_error());
    }

    let pairs: Vec<RenamePair> = files
        .iter()
        .filter_map(|file| {
            let new_name = replace_in_name(&file.filename, find, replace);
            if new_name == file.filename {
                return None;
            }
            trace!(
                "Planned {} -> {}",
                file.filename.to_string_lossy(),
                new_name.to_string_lossy()
            );
            Some(RenamePair::new(
                file.path.clone(),
                file.path.with_file_name(new_name),
            ))
        })
        .collect();

    debug!("Planned {} renames out of {} files", pairs.len(), files.len());

    Ok(pairs)
}
