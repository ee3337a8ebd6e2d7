use std::io::stdin;
use std::process::ExitCode;

use atty::Stream;
use human_panic::setup_panic;
use log::error;

use rnr::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    if !atty::is(Stream::Stdout) {
        colored::control::set_override(false);
    }

    let options = match RenameOptions::from_matches(&matches) {
        Ok(options) => options,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut input = stdin().lock();
    match process_renames(&options, &mut input) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
