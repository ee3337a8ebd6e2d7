use std::fs::{File, create_dir};
use std::path::Path;

use tempfile::{TempDir, tempdir};

use rnr::discovery::{discover, validate_root};
use rnr::errors::Error;

// root/
//   file1.txt
//   file2.log
//   subdir1/
//     file3.txt
//     file4.md
//   subdir2/
//     file5.txt
fn create_test_tree() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path();

    File::create(root.join("file1.txt")).unwrap();
    File::create(root.join("file2.log")).unwrap();

    create_dir(root.join("subdir1")).unwrap();
    File::create(root.join("subdir1").join("file3.txt")).unwrap();
    File::create(root.join("subdir1").join("file4.md")).unwrap();

    create_dir(root.join("subdir2")).unwrap();
    File::create(root.join("subdir2").join("file5.txt")).unwrap();

    temp_dir
}

fn names(root: &Path, pattern: Option<&str>, recursive: bool) -> Vec<String> {
    discover(root, pattern, recursive)
        .unwrap()
        .into_iter()
        .map(|entry| entry.filename.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_discover_recursive() {
    let temp_dir = create_test_tree();
    let files = discover(temp_dir.path(), None, true).unwrap();
    assert_eq!(files.len(), 5);
}

#[test]
fn test_discover_non_recursive() {
    let temp_dir = create_test_tree();
    assert_eq!(
        names(temp_dir.path(), None, false),
        vec!["file1.txt", "file2.log"]
    );
}

#[test]
fn test_discover_with_pattern() {
    let temp_dir = create_test_tree();
    let files = discover(temp_dir.path(), Some(".txt"), true).unwrap();

    assert_eq!(files.len(), 3);
    for file in &files {
        assert!(file.filename.to_string_lossy().contains(".txt"));
    }
}

#[test]
fn test_empty_pattern_matches_everything() {
    let temp_dir = create_test_tree();
    assert_eq!(discover(temp_dir.path(), Some(""), true).unwrap().len(), 5);
}

#[test]
fn test_discover_no_matches() {
    let temp_dir = create_test_tree();
    assert!(discover(temp_dir.path(), Some(".xyz"), true).unwrap().is_empty());
}

#[test]
fn test_discover_is_case_sensitive() {
    let temp_dir = create_test_tree();
    File::create(temp_dir.path().join("FILE_CAPS.TXT")).unwrap();

    assert_eq!(names(temp_dir.path(), Some(".txt"), false), vec!["file1.txt"]);
}

#[test]
fn test_discover_includes_hidden_files() {
    let temp_dir = tempdir().unwrap();
    File::create(temp_dir.path().join(".hidden_file")).unwrap();

    assert_eq!(names(temp_dir.path(), None, false), vec![".hidden_file"]);
}

#[test]
fn test_discover_skips_directories() {
    let temp_dir = tempdir().unwrap();
    create_dir(temp_dir.path().join("match_dir")).unwrap();
    File::create(temp_dir.path().join("match_file")).unwrap();

    assert_eq!(names(temp_dir.path(), Some("match"), true), vec!["match_file"]);
}

#[test]
fn test_discover_sorts_by_full_path() {
    let temp_dir = create_test_tree();
    let files = discover(temp_dir.path(), None, true).unwrap();

    let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
    let mut sorted = paths.clone();
    sorted.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    assert_eq!(paths, sorted);

    // Running again on the same tree gives the same order
    let again: Vec<_> = discover(temp_dir.path(), None, true)
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    assert_eq!(paths, again);
}

#[test]
fn test_discover_empty_directory() {
    let temp_dir = tempdir().unwrap();
    assert!(discover(temp_dir.path(), None, true).unwrap().is_empty());
}

#[test]
fn test_missing_root_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("nonexistent");

    let err = discover(&missing, None, true).unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { .. }));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_file_root_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("file.txt");
    File::create(&file).unwrap();

    let err = validate_root(&file).unwrap_err();
    assert!(err.to_string().contains("is not a directory"));
}

#[cfg(unix)]
#[test]
fn test_directory_symlinks_are_not_followed() {
    use std::os::unix::fs::symlink;

    let temp_dir = create_test_tree();
    let root = temp_dir.path();
    // A link back to the root would loop forever if followed
    symlink(root, root.join("subdir1").join("loop")).unwrap();
    symlink(root.join("file1.txt"), root.join("link.txt")).unwrap();

    let found = names(root, Some(".txt"), true);
    assert_eq!(found.len(), 4);
    assert!(found.contains(&"link.txt".to_string()));
}

// Some filesystems (APFS) refuse names that are not valid UTF-8
#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_discovered() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    let raw = OsStr::from_bytes(b"report_\xff_old.txt");
    File::create(root.join(raw)).unwrap();
    File::create(root.join("plain_old.txt")).unwrap();
    File::create(root.join("unrelated.txt")).unwrap();

    let files = discover(root, Some("_old"), true).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|f| f.filename == raw));
}
