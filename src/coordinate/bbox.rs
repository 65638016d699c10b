//! Bounding box structure for rectangular region tests

use super::point::Coordinate;

/// An axis-aligned longitude/latitude rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum longitude
    pub min_lon: f64,
    /// Minimum latitude
    pub min_lat: f64,
    /// Maximum longitude
    pub max_lon: f64,
    /// Maximum latitude
    pub max_lat: f64,
}

impl BoundingBox {
    /// Region in which the GCJ-02 offset is applied
    pub const CHINA: BoundingBox = BoundingBox {
        min_lon: 73.66,
        min_lat: 3.86,
        max_lon: 135.05,
        max_lat: 53.55,
    };

    /// Create a new bounding box
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        BoundingBox {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Check if this bounding box contains a point, edges included
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.longitude() >= self.min_lon && point.longitude() <= self.max_lon &&
            point.latitude() >= self.min_lat && point.latitude() <= self.max_lat
    }

    /// Check if a point lies strictly inside this bounding box
    pub fn contains_exclusive(&self, point: &Coordinate) -> bool {
        point.longitude() > self.min_lon && point.longitude() < self.max_lon &&
            point.latitude() > self.min_lat && point.latitude() < self.max_lat
    }
}
