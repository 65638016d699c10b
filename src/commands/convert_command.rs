//! Coordinate system conversion command
//!
//! Converts a single point given on the command line, or a batch file with
//! one "lon,lat" pair per line.

use std::fs;

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::coordinate::{Coordinate, CoordinateSystem, CoordinateSystemFactory};
use crate::errors::{GeoError, GeoResult};
use crate::utils::format_utils::{clean_input_line, format_coordinate};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Where the points to convert come from
enum ConvertSource {
    Point(Coordinate),
    File(String),
}

/// Command for converting coordinates between WGS-84 and GCJ-02
pub struct ConvertCommand<'a> {
    source: ConvertSource,
    from: CoordinateSystem,
    to: CoordinateSystem,
    settings: &'a Settings,
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Matches of the `convert` subcommand
    /// * `settings` - Output settings
    /// * `logger` - Logger for recording conversions
    pub fn new(args: &ArgMatches, settings: &'a Settings, logger: &'a Logger) -> GeoResult<Self> {
        let from = parse_system(args, "from")?;
        let to = parse_system(args, "to")?;

        let source = match (args.get_one::<String>("point"), args.get_one::<String>("input")) {
            (Some(point), None) => ConvertSource::Point(Coordinate::from_string(point)?),
            (None, Some(path)) => ConvertSource::File(path.clone()),
            _ => return Err(GeoError::GenericError(
                "Specify exactly one of a 'lon,lat' point or --input <FILE>".to_string()
            )),
        };

        Ok(ConvertCommand {
            source,
            from,
            to,
            settings,
            logger,
        })
    }

    fn convert_one(&self, coord: Coordinate) -> GeoResult<String> {
        let converted = self.from.convert(coord, self.to);
        debug!("{} -> {}: {} => {}", self.from.name(), self.to.name(), coord, converted);
        self.logger.record_conversion(self.from, self.to, &coord, &converted)?;
        Ok(format_coordinate(&converted, self.settings))
    }

    /// Convert every usable line of a batch document, skipping bad lines
    pub fn convert_lines(&self, contents: &str, progress: &ProgressTracker) -> GeoResult<Vec<String>> {
        let mut output = Vec::new();
        let mut skipped = 0usize;

        for (index, line) in contents.lines().enumerate() {
            progress.increment(1);
            let Some(text) = clean_input_line(line) else {
                continue;
            };

            match Coordinate::from_string(text) {
                Ok(coord) => output.push(self.convert_one(coord)?),
                Err(e) => {
                    skipped += 1;
                    warn!("Skipping line {}: {}", index + 1, e);
                    progress.println(&format!("line {}: {}", index + 1, e));
                }
            }
        }

        progress.finish();
        info!("Converted {} points, skipped {}", output.len(), skipped);
        Ok(output)
    }
}

fn parse_system(args: &ArgMatches, name: &str) -> GeoResult<CoordinateSystem> {
    let value = args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing --{}", name)))?;
    CoordinateSystemFactory::from_string(value)
}

impl<'a> Command for ConvertCommand<'a> {
    fn render(&self) -> GeoResult<Vec<String>> {
        info!("Converting from {} to {}", self.from, self.to);

        match &self.source {
            ConvertSource::Point(coord) => Ok(vec![self.convert_one(*coord)?]),
            ConvertSource::File(path) => {
                let contents = fs::read_to_string(path)?;
                let progress = ProgressTracker::new(contents.lines().count() as u64, "Converting");
                self.convert_lines(&contents, &progress)
            }
        }
    }
}
