//! Coordinate transformation functionality

use super::crs::CoordinateSystem;
use super::delta::compute_delta;
use super::point::Coordinate;

/// Convert a WGS-84 coordinate to GCJ-02
///
/// Points outside the China box are returned unchanged.
pub fn wgs84_to_gcj02(coord: Coordinate) -> Coordinate {
    if coord.is_out_of_china() {
        return coord;
    }
    let delta = compute_delta(&coord);
    shifted(coord, delta.longitude, delta.latitude)
}

/// Convert a GCJ-02 coordinate back to WGS-84
///
/// This is an approximate inverse: the offset is evaluated at the GCJ-02
/// point itself, so a round trip recovers the original to within ~50 m.
pub fn gcj02_to_wgs84(coord: Coordinate) -> Coordinate {
    if coord.is_out_of_china() {
        return coord;
    }
    let delta = compute_delta(&coord);
    shifted(coord, -delta.longitude, -delta.latitude)
}

fn shifted(coord: Coordinate, d_lon: f64, d_lat: f64) -> Coordinate {
    // Offsets are at most a few hundredths of a degree and only applied
    // inside the China box, so the result stays in range
    Coordinate::new(coord.longitude() + d_lon, coord.latitude() + d_lat).unwrap_or(coord)
}

/// Transformer for converting between coordinate systems
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Transform a single coordinate between systems
    pub fn transform_point(&self, coord: Coordinate, from: CoordinateSystem, to: CoordinateSystem) -> Coordinate {
        from.convert(coord, to)
    }

    /// Transform a slice of coordinates between systems, preserving order
    pub fn transform_all(&self, coords: &[Coordinate], from: CoordinateSystem, to: CoordinateSystem) -> Vec<Coordinate> {
        coords.iter()
            .map(|c| self.transform_point(*c, from, to))
            .collect()
    }
}
