//! China bounding box check command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::coordinate::Coordinate;
use crate::errors::{GeoError, GeoResult};

/// Command reporting whether a point gets the GCJ-02 offset
pub struct CheckCommand {
    coord: Coordinate,
}

impl CheckCommand {
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let point = args.get_one::<String>("point")
            .ok_or_else(|| GeoError::GenericError("Missing point".to_string()))?;
        Ok(CheckCommand { coord: Coordinate::from_string(point)? })
    }
}

impl Command for CheckCommand {
    fn render(&self) -> GeoResult<Vec<String>> {
        let verdict = if self.coord.is_out_of_china() { "outside" } else { "inside" };
        Ok(vec![format!("{} is {} the China bounding box", self.coord, verdict)])
    }
}
