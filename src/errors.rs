//! Custom error types for coordinate processing

use std::fmt;
use std::io;

/// Which axis of a coordinate a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    /// Absolute bound for this axis in decimal degrees
    pub fn bound(&self) -> f64 {
        match self {
            Axis::Longitude => 180.0,
            Axis::Latitude => 90.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Axis::Longitude => "longitude",
            Axis::Latitude => "latitude",
        }
    }
}

/// Coordinate-specific error types
#[derive(Debug)]
pub enum GeoError {
    /// Longitude or latitude outside its valid range
    OutOfRange { axis: Axis, value: f64 },
    /// DMS text that does not follow the D°M'S"H grammar
    MalformedDms(String),
    /// Coordinate system name that could not be resolved
    UnknownCoordinateSystem(String),
    /// Invalid configuration value
    InvalidConfig(String),
    /// I/O error
    IoError(io::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::OutOfRange { axis, value } => write!(
                f,
                "{} out of range: {} (allowed: -{} to {})",
                axis.name(), value, axis.bound(), axis.bound()
            ),
            GeoError::MalformedDms(text) => write!(f, "Malformed DMS value: {:?}", text),
            GeoError::UnknownCoordinateSystem(name) => write!(f, "Unknown coordinate system: {}", name),
            GeoError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for coordinate operations
pub type GeoResult<T> = Result<T, GeoError>;
