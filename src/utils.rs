use std::ffi::{OsStr, OsString};
use std::fs::create_dir_all;
use std::path::PathBuf;

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

/// Expands a leading `~` in a user supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(tilde(path).as_ref())
}

/// Returns true when the filename `name` contains `pattern`
///
/// On Unix the comparison runs on the raw bytes of the name, so names that
/// are not valid UTF-8 can still match. Elsewhere such names never match.
pub fn name_contains(name: &OsStr, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        memchr::memmem::find(name.as_bytes(), pattern.as_bytes()).is_some()
    }
    #[cfg(not(unix))]
    {
        name.to_str().is_some_and(|name| name.contains(pattern))
    }
}

/// Replaces every non-overlapping occurrence of `find` in the filename `name`
///
/// Works on raw bytes on Unix. On other platforms a name that is not valid
/// unicode is returned unchanged.
pub fn replace_in_name(name: &OsStr, find: &str, replace: &str) -> OsString {
    if find.is_empty() {
        return name.to_os_string();
    }

    #[cfg(unix)]
    {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};
        OsString::from_vec(replace_bytes(
            name.as_bytes(),
            find.as_bytes(),
            replace.as_bytes(),
        ))
    }
    #[cfg(not(unix))]
    {
        match name.to_str() {
            Some(name) => OsString::from(name.replace(find, replace)),
            None => name.to_os_string(),
        }
    }
}

#[cfg(unix)]
fn replace_bytes(haystack: &[u8], find: &[u8], replace: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut last = 0;
    for start in memchr::memmem::find_iter(haystack, find) {
        out.extend_from_slice(&haystack[last..start]);
        out.extend_from_slice(replace);
        last = start + find.len();
    }
    out.extend_from_slice(&haystack[last..]);
    out
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
