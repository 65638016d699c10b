//! DMS formatting and parsing commands

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::coordinate::{from_dms, to_dms};
use crate::errors::{GeoError, GeoResult};

/// Command formatting a decimal-degree value as DMS text
pub struct DmsCommand {
    value: f64,
    is_latitude: bool,
}

impl DmsCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let raw = args.get_one::<String>("value")
            .ok_or_else(|| GeoError::GenericError("Missing value".to_string()))?;
        let value = raw.trim().parse::<f64>()
            .map_err(|_| GeoError::GenericError(format!("Invalid decimal degrees: {}", raw)))?;

        let is_latitude = match args.get_one::<String>("axis").map(|s| s.to_lowercase()) {
            Some(axis) if axis == "lat" || axis == "latitude" => true,
            Some(axis) if axis == "lon" || axis == "longitude" => false,
            Some(axis) => return Err(GeoError::GenericError(format!("Unknown axis: {}", axis))),
            None => false,
        };

        Ok(DmsCommand { value, is_latitude })
    }
}

impl Command for DmsCommand {
    fn render(&self) -> GeoResult<Vec<String>> {
        match to_dms(self.value, self.is_latitude) {
            Some(text) => Ok(vec![text]),
            None => {
                let axis = if self.is_latitude { "latitude" } else { "longitude" };
                info!("{} is outside the {} range, nothing to format", self.value, axis);
                Ok(vec![format!("{} is not a valid {}", self.value, axis)])
            }
        }
    }
}

/// Command parsing DMS text into decimal degrees
pub struct ParseDmsCommand<'a> {
    text: String,
    settings: &'a Settings,
}

impl<'a> ParseDmsCommand<'a> {
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> GeoResult<Self> {
        let text = args.get_one::<String>("text")
            .ok_or_else(|| GeoError::GenericError("Missing DMS text".to_string()))?
            .clone();
        Ok(ParseDmsCommand { text, settings })
    }
}

impl<'a> Command for ParseDmsCommand<'a> {
    fn render(&self) -> GeoResult<Vec<String>> {
        let value = from_dms(&self.text)?;
        Ok(vec![format!("{:.*}", self.settings.precision as usize, value)])
    }
}
