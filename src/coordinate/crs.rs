//! Coordinate Reference System handling

use std::fmt;
use std::str::FromStr;

use super::point::Coordinate;
use super::transform::{gcj02_to_wgs84, wgs84_to_gcj02};
use crate::errors::{GeoError, GeoResult};

/// The two datums this crate converts between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// WGS 84 (EPSG:4326), the GPS datum
    Wgs84,
    /// GCJ-02, the obfuscated datum required for maps of mainland China
    Gcj02,
}

impl CoordinateSystem {
    /// Short lowercase name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::Wgs84 => "wgs84",
            CoordinateSystem::Gcj02 => "gcj02",
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> &'static str {
        match self {
            CoordinateSystem::Wgs84 => "WGS 84 (EPSG:4326)",
            CoordinateSystem::Gcj02 => "GCJ-02 (Mars coordinates)",
        }
    }

    /// Convert a coordinate expressed in `self` into `target`
    pub fn convert(self, coord: Coordinate, target: CoordinateSystem) -> Coordinate {
        match (self, target) {
            (CoordinateSystem::Wgs84, CoordinateSystem::Gcj02) => wgs84_to_gcj02(coord),
            (CoordinateSystem::Gcj02, CoordinateSystem::Wgs84) => gcj02_to_wgs84(coord),
            _ => coord,
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for CoordinateSystem {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoordinateSystemFactory::from_string(s)
    }
}

/// Factory for creating coordinate systems
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Parse a coordinate system from a string (e.g. "wgs84", "EPSG:4326", "gcj-02")
    pub fn from_string(crs_str: &str) -> GeoResult<CoordinateSystem> {
        match crs_str.trim().to_lowercase().as_str() {
            "wgs84" | "wgs-84" | "epsg:4326" | "4326" => Ok(CoordinateSystem::Wgs84),
            "gcj02" | "gcj-02" | "mars" => Ok(CoordinateSystem::Gcj02),
            _ => Err(GeoError::UnknownCoordinateSystem(crs_str.to_string())),
        }
    }
}
