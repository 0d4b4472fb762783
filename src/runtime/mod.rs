use std::env;
use std::path::Path;
use std::process::ExitCode;

use crate::config::Settings;
use crate::logging;

mod args;
mod commands;
mod settings;

pub use args::Command;

/// Process exit status for a command that completed.
pub const EXIT_OK: u8 = 0;
/// Process exit status for bad arguments or a command that failed.
pub const EXIT_FAILURE: u8 = 1;

pub fn run() -> ExitCode {
    let command = match args::parse(env::args().skip(1)) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("boxart: {msg}");
            eprintln!("{}", args::USAGE);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if command == Command::Help {
        println!("{}", args::USAGE);
        return ExitCode::from(EXIT_OK);
    }

    let settings = settings::load_settings();
    logging::init(&settings.logging);

    let root = env::current_dir().unwrap_or_else(|_| ".".into());
    ExitCode::from(execute(command, &settings, &root))
}

/// Run one parsed command and map its result to an exit status.
///
/// Errors are reported on stderr. Partial download failures are not errors.
pub fn execute(command: Command, settings: &Settings, root: &Path) -> u8 {
    let result = match command {
        Command::Fetch { catalog } => commands::fetch(&settings.fetch, catalog, root).map(|_| ()),
        Command::Sort { input, output } => {
            commands::sort(&settings.sort, input, output).map(|_| ())
        }
        Command::Config => commands::show_config(settings),
        Command::Help => {
            println!("{}", args::USAGE);
            Ok(())
        }
    };

    match result {
        Ok(()) => EXIT_OK,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_FAILURE
        }
    }
}
