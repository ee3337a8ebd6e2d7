//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "rnr";

/// Application name used for identification
///
/// This is used to locate the per-user configuration directory that log
/// files are written to.
pub const APPLICATION: &str = "rnr";

/// Default root directory to search
pub const DEFAULT_PATH: &str = ".";

/// Number of conflicts listed before the rest are only counted
pub const CONFLICT_PREVIEW_LIMIT: usize = 5;

/// Answers that confirm the interactive prompt
pub const CONFIRM_ANSWERS: [&str; 2] = ["y", "yes"];

/// Help text for the find command-line option
pub const FIND_HELP: &str = "Pattern to find in filenames";

/// Help text for the replace command-line option
pub const REPLACE_HELP: &str = "Replacement string (use empty string \"\" to remove)";

/// Help text for the path command-line option
pub const PATH_HELP: &str = "Root path to search (default: current directory)";

/// Help text for the no-recursive command-line option
pub const NO_RECURSIVE_HELP: &str = "Do not search recursively";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Preview changes without applying them";

/// Help text for the yes command-line option
pub const YES_HELP: &str = "Skip confirmation prompt";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str =
    "Show detailed output during renaming (repeat for debug logging)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file relative to the current directory instead of the config directory";

/// Usage examples shown after the option list
pub const AFTER_HELP: &str = "\
Examples:
  # Preview renaming .txt files (dry-run)
  rnr --find \".txt\" --replace \".md\" --dry-run

  # Replace spaces with underscores in current directory
  rnr --find \" \" --replace \"_\"

  # Rename files in specific directory non-recursively
  rnr --find \"old\" --replace \"new\" --path /path/to/dir --no-recursive

  # Remove pattern from filenames
  rnr --find \"_backup\" --replace \"\"";
