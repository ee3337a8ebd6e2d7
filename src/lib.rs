//! rnr - recursively rename files by literal substring replacement
//!
//! The crate is a linear pipeline: [`discovery`] finds the files,
//! [`path_gen`] plans the new names, [`conflict`] refuses colliding plans and
//! [`file_ops`] applies what is left. [`workflow`] ties the stages together
//! for the `rnr` binary.

pub mod cli;
pub mod conflict;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{build_command, get_log_file, get_matches, get_verbosity};
    pub use crate::conflict::detect_conflicts;
    pub use crate::discovery::{FileEntry, discover};
    pub use crate::errors::{
        conflict_error, empty_pattern_error, file_operation_error, generic_error,
        invalid_filename_error, invalid_root_error, rename_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::file_ops::{ExecutionResult, RenameFailure, apply_renames, apply_renames_with};
    pub use crate::logging::{LogLevel, init_logger};
    pub use crate::path_gen::{RenamePair, generate_name, generate_rename_pairs};
    pub use crate::workflow::report::print_error;
    pub use crate::workflow::{RenameOptions, RunOutcome, process_renames};
}
