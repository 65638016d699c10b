//! WGS-84 / GCJ-02 coordinate conversion toolkit
//!
//! The core is a set of pure functions over an immutable [`Coordinate`]:
//! [`wgs84_to_gcj02`], [`gcj02_to_wgs84`], [`to_dms`] and [`from_dms`].
//! The datum conversions use IEEE-754 `f64` and stay well within the ~50 m
//! tolerance of the obfuscation algorithm itself. DMS formatting works on
//! the exact decimal digits of the input, so minutes and seconds follow
//! decimal arithmetic rather than binary rounding.

pub mod errors;
pub mod coordinate;
pub mod config;
pub mod utils;
pub mod commands;

pub use errors::{Axis, GeoError, GeoResult};
pub use coordinate::{
    from_dms, gcj02_to_wgs84, to_dms, wgs84_to_gcj02, BoundingBox, Coordinate, CoordinateSystem,
    CoordinateSystemFactory, CoordinateTransformer,
};
pub use config::Settings;
