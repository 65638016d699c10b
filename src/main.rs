use std::process;
use log::{debug, error, LevelFilter};

use gcjkit::commands::{build_cli, CommandFactory, GcjkitCommandFactory};
use gcjkit::config::Settings;
use gcjkit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Settings::builtin(),
    };

    if matches.get_flag("verbose") {
        settings.log_level = LevelFilter::Debug;
    }

    // Conversion records go to a journal next to the log file
    let journal_file = format!("{}.journal", settings.log_file);
    let log_to_file = !matches.get_flag("no-log-file");

    let logger = if log_to_file {
        if let Err(e) = Logger::init_global_logger(&settings.log_file, settings.log_level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
        Logger::new(&journal_file)
    } else {
        Logger::init_console_logger(settings.log_level);
        Ok(Logger::disabled())
    };

    let logger = match logger {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    debug!("Using settings: {:?}", settings);

    let factory = GcjkitCommandFactory::new();

    match factory.create_command(&matches, &settings, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
