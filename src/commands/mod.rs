//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod dms_command;
pub mod check_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use dms_command::{DmsCommand, ParseDmsCommand};
pub use check_command::CheckCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::config::Settings;
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;

/// Build the clap definition of the `gcjkit` command line
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("gcjkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert coordinates between WGS-84 and GCJ-02 and format them as DMS")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML settings file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-log-file")
                .long("no-log-file")
                .help("Log to the console only")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("convert")
                .about("Convert a point or a file of points between coordinate systems")
                .arg(
                    Arg::new("point")
                        .help("Point in 'lon,lat' format")
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("File with one 'lon,lat' point per line")
                        .value_name("FILE")
                        .conflicts_with("point"),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source coordinate system (wgs84, gcj02)")
                        .value_name("CRS")
                        .default_value("wgs84"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target coordinate system (wgs84, gcj02)")
                        .value_name("CRS")
                        .default_value("gcj02"),
                ),
        )
        .subcommand(
            ClapCommand::new("dms")
                .about("Format decimal degrees as degrees-minutes-seconds")
                .arg(
                    Arg::new("value")
                        .help("Decimal degrees")
                        .required(true)
                        .allow_negative_numbers(true)
                        .index(1),
                )
                .arg(
                    Arg::new("axis")
                        .long("axis")
                        .help("Axis of the value (lat or lon)")
                        .value_name("AXIS")
                        .default_value("lon"),
                ),
        )
        .subcommand(
            ClapCommand::new("parse-dms")
                .about("Parse degrees-minutes-seconds text into decimal degrees")
                .arg(
                    Arg::new("text")
                        .help("DMS text such as 116°23'29.40\"E")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            ClapCommand::new("check")
                .about("Report whether a point lies in the China bounding box")
                .arg(
                    Arg::new("point")
                        .help("Point in 'lon,lat' format")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                ),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct GcjkitCommandFactory;

impl GcjkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GcjkitCommandFactory
    }
}

impl Default for GcjkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GcjkitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        settings: &'a Settings,
        logger: &'a Logger,
    ) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("convert", sub)) => Ok(Box::new(ConvertCommand::new(sub, settings, logger)?)),
            Some(("dms", sub)) => Ok(Box::new(DmsCommand::new(sub)?)),
            Some(("parse-dms", sub)) => Ok(Box::new(ParseDmsCommand::new(sub, settings)?)),
            Some(("check", sub)) => Ok(Box::new(CheckCommand::new(sub)?)),
            Some((name, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", name))),
            None => Err(GeoError::GenericError("No command given".to_string())),
        }
    }
}
