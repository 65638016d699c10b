//! GCJ-02 offset polynomials
//!
//! Pure functions computing the non-linear displacement between a WGS-84
//! point and its GCJ-02 counterpart. All arithmetic is IEEE-754 `f64`.

use super::point::Coordinate;

/// Truncated pi literal used by the reference algorithm
#[allow(clippy::excessive_precision)]
pub const PI: f64 = 3.1415926535897932384626;

/// Semi-major axis of the Krasovsky-style ellipsoid, in meters
pub const A: f64 = 6378245.0;

/// Eccentricity squared
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;

/// Reference point `(longitude, latitude)` the polynomials are centred on
pub const REFERENCE_POINT: (f64, f64) = (105.0, 35.0);

/// Offset in decimal degrees to add to a WGS-84 point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    pub longitude: f64,
    pub latitude: f64,
}

/// Raw longitude term for offsets `(d_lon, d_lat)` from the reference point
pub fn transform_longitude(d_lon: f64, d_lat: f64) -> f64 {
    let mut ret = 300.0 + d_lon + 2.0 * d_lat + 0.1 * d_lon * d_lon
        + 0.1 * d_lon * d_lat + 0.1 * d_lon.abs().sqrt();
    ret += shared_harmonics(d_lon);
    ret += (20.0 * (PI * d_lon).sin() + 40.0 * (PI * d_lon / 3.0).sin()) * 2.0 / 3.0;
    ret += (150.0 * (PI * d_lon / 12.0).sin() + 300.0 * (PI * d_lon / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Raw latitude term for offsets `(d_lon, d_lat)` from the reference point
pub fn transform_latitude(d_lon: f64, d_lat: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * d_lon + 3.0 * d_lat + 0.2 * d_lat * d_lat
        + 0.1 * d_lon * d_lat + 0.2 * d_lon.abs().sqrt();
    ret += shared_harmonics(d_lon);
    ret += (20.0 * (PI * d_lat).sin() + 40.0 * (PI * d_lat / 3.0).sin()) * 2.0 / 3.0;
    ret += (160.0 * (PI * d_lat / 12.0).sin() + 320.0 * (PI * d_lat / 30.0).sin()) * 2.0 / 3.0;
    ret
}

// Both axes share the same high-frequency longitude harmonics
fn shared_harmonics(d_lon: f64) -> f64 {
    (20.0 * (6.0 * PI * d_lon).sin() + 20.0 * (2.0 * PI * d_lon).sin()) * 2.0 / 3.0
}

/// Compute the GCJ-02 offset for a coordinate
///
/// The raw polynomial terms are scaled by the meridian and prime-vertical
/// radii of curvature at the point's latitude to turn them into degrees.
pub fn compute_delta(coord: &Coordinate) -> Delta {
    let d_lon = coord.longitude() - REFERENCE_POINT.0;
    let d_lat = coord.latitude() - REFERENCE_POINT.1;

    let rad_lat = coord.latitude() / 180.0 * PI;
    let sin_lat = rad_lat.sin();
    let magic = 1.0 - EE * sin_lat * sin_lat;
    let sqrt_magic = magic.sqrt();

    let t_lon = transform_longitude(d_lon, d_lat);
    let t_lat = transform_latitude(d_lon, d_lat);

    let latitude = (t_lat * 180.0) / ((A * (1.0 - EE) / (magic * sqrt_magic)) * PI);
    let longitude = (t_lon * 180.0) / ((A / sqrt_magic) * rad_lat.cos() * PI);

    Delta { longitude, latitude }
}
