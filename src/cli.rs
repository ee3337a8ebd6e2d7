use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::constants::{
    AFTER_HELP, DEFAULT_PATH, DRY_RUN_HELP, FIND_HELP, LOCAL_LOGGING_HELP, LOG_FILE_HELP,
    NO_RECURSIVE_HELP, PATH_HELP, REPLACE_HELP, VERBOSE_HELP, YES_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::{expand_path, find_project_folder};
use crate::workflow::RenameOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `find`: Literal substring to search for, must not be empty
/// - `replace`: Literal replacement, may be empty
/// - `path`: Root directory to search
/// - `no_recursive`: Only look at direct children of the root
/// - `dry_run`: Preview without renaming anything
/// - `yes`: Skip the confirmation prompt
/// - `verbose`: Print successful renames, repeat for debug logging
/// - `log_file` / `log_locally`: Optional log file sink
pub fn build_command() -> Command {
    let arg_find = Arg::new("find")
        .short('f')
        .long("find")
        .help(FIND_HELP)
        .required(true)
        .value_parser(NonEmptyStringValueParser::new());

    let arg_replace = Arg::new("replace")
        .short('r')
        .long("replace")
        .help(REPLACE_HELP)
        .required(true);

    let arg_path = Arg::new("path")
        .short('p')
        .long("path")
        .help(PATH_HELP)
        .default_value(DEFAULT_PATH);

    let arg_no_recursive = Arg::new("no_recursive")
        .long("no-recursive")
        .help(NO_RECURSIVE_HELP)
        .action(ArgAction::SetTrue);

    let arg_dry_run = Arg::new("dry_run")
        .short('d')
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_yes = Arg::new("yes")
        .short('y')
        .long("yes")
        .help(YES_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    let arg_log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .requires("log_file")
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .after_help(AFTER_HELP)
        .arg(arg_find)
        .arg(arg_replace)
        .arg(arg_path)
        .arg(arg_no_recursive)
        .arg(arg_dry_run)
        .arg(arg_yes)
        .arg(arg_verbose)
        .arg(arg_log_file)
        .arg(arg_log_locally)
}

/// Parses the process arguments, exiting with status 2 on misuse
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

impl RenameOptions {
    /// Converts parsed arguments into workflow options
    ///
    /// # Errors
    /// Returns an error if a required argument is missing
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let find = matches
            .get_one::<String>("find")
            .ok_or_else(|| generic_error("The --find option is required"))?;
        let replace = matches
            .get_one::<String>("replace")
            .ok_or_else(|| generic_error("The --replace option is required"))?;
        let path = matches
            .get_one::<String>("path")
            .map(String::as_str)
            .unwrap_or(DEFAULT_PATH);

        let mut options = RenameOptions::new(expand_path(path), find, replace);
        options.recursive = !matches.get_flag("no_recursive");
        options.dry_run = matches.get_flag("dry_run");
        options.assume_yes = matches.get_flag("yes");
        options.verbose = matches.get_count("verbose") > 0;

        Ok(options)
    }
}

/// Gets the verbosity level from the number of `-v` flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Resolves where the log file goes, if one was requested
///
/// Without `--log-locally` the file name is placed in the per-user
/// configuration directory.
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined or created
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };

    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}
