//! Coordinate handling for WGS-84 and GCJ-02
//!
//! This module provides the validated coordinate value, the DMS text
//! format, the GCJ-02 offset engine and the converter built on it.

mod bbox;
mod point;
pub mod delta;
pub mod dms;
mod transform;
mod crs;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Coordinate;
pub use self::delta::{compute_delta, Delta};
pub use self::dms::{from_dms, to_dms};
pub use self::transform::{gcj02_to_wgs84, wgs84_to_gcj02, CoordinateTransformer};
pub use self::crs::{CoordinateSystem, CoordinateSystemFactory};
