//! Coordinate structure for representing validated geographic points

use std::fmt;
use std::str::FromStr;

use super::bbox::BoundingBox;
use super::dms;
use crate::errors::{Axis, GeoError, GeoResult};

/// An immutable longitude/latitude pair in decimal degrees
///
/// Construction validates both axes, so every `Coordinate` in existence
/// satisfies `-180 <= longitude <= 180` and `-90 <= latitude <= 90`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    /// Create a new coordinate, rejecting values outside the axis bounds
    ///
    /// # Arguments
    /// * `longitude` - Longitude in decimal degrees
    /// * `latitude` - Latitude in decimal degrees
    ///
    /// # Returns
    /// The coordinate, or `GeoError::OutOfRange` naming the offending axis
    pub fn new(longitude: f64, latitude: f64) -> GeoResult<Self> {
        check_axis(Axis::Longitude, longitude)?;
        check_axis(Axis::Latitude, latitude)?;
        Ok(Coordinate { longitude, latitude })
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Fast rectangular pre-filter for the GCJ-02 region
    ///
    /// Points on the edge of the box count as outside.
    pub fn is_out_of_china(&self) -> bool {
        !BoundingBox::CHINA.contains_exclusive(self)
    }

    /// Offset `(d_lon, d_lat)` from `other` to this point
    pub fn offset_from(&self, other: &Coordinate) -> (f64, f64) {
        (self.longitude - other.longitude, self.latitude - other.latitude)
    }

    /// Parse a coordinate from a string (format: "lon,lat")
    pub fn from_string(coord_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = coord_str.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoError::GenericError(format!(
                "Coordinate must be in format 'lon,lat', got '{}'", coord_str
            )));
        }

        let longitude = parts[0].trim().parse::<f64>()
            .map_err(|_| GeoError::GenericError(format!("Invalid longitude value: '{}'", parts[0].trim())))?;
        let latitude = parts[1].trim().parse::<f64>()
            .map_err(|_| GeoError::GenericError(format!("Invalid latitude value: '{}'", parts[1].trim())))?;

        Coordinate::new(longitude, latitude)
    }

    /// Build a coordinate from a pair of DMS strings
    pub fn from_dms(longitude: &str, latitude: &str) -> GeoResult<Self> {
        Coordinate::new(dms::from_dms(longitude)?, dms::from_dms(latitude)?)
    }

    /// Format both axes as DMS text, `(longitude, latitude)`
    pub fn to_dms(&self) -> Option<(String, String)> {
        Some((
            dms::to_dms(self.longitude, false)?,
            dms::to_dms(self.latitude, true)?,
        ))
    }
}

fn check_axis(axis: Axis, value: f64) -> GeoResult<()> {
    // NaN fails both comparisons, so it is caught here as well
    if value.is_finite() && value >= -axis.bound() && value <= axis.bound() {
        Ok(())
    } else {
        Err(GeoError::OutOfRange { axis, value })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*}", p, self.longitude, p, self.latitude),
            None => write!(f, "{},{}", self.longitude, self.latitude),
        }
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::from_string(s)
    }
}
