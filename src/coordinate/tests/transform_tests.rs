//! Tests for the WGS-84 / GCJ-02 converter

use crate::coordinate::{
    gcj02_to_wgs84, wgs84_to_gcj02, Coordinate, CoordinateSystem, CoordinateSystemFactory,
    CoordinateTransformer,
};
use crate::errors::GeoError;

#[test]
fn test_wgs84_to_gcj02_beijing() {
    let gcj = wgs84_to_gcj02(Coordinate::new(116.3915, 39.9042).unwrap());
    super::assert_close(gcj.longitude(), 116.397741, 1e-6);
    super::assert_close(gcj.latitude(), 39.905601, 1e-6);
}

#[test]
fn test_gcj02_to_wgs84_beijing() {
    let wgs = gcj02_to_wgs84(Coordinate::new(116.3915, 39.9042).unwrap());
    super::assert_close(wgs.longitude(), 116.385259, 1e-6);
    super::assert_close(wgs.latitude(), 39.902799, 1e-6);
}

#[test]
fn test_identity_outside_china() {
    let tokyo = Coordinate::new(139.6917, 35.6895).unwrap();
    assert_eq!(wgs84_to_gcj02(tokyo), tokyo);
    assert_eq!(gcj02_to_wgs84(tokyo), tokyo);

    let edge = Coordinate::new(73.66, 30.0).unwrap();
    assert_eq!(wgs84_to_gcj02(edge), edge);
}

#[test]
fn test_points_near_box_edge_are_shifted() {
    for (lon, lat) in [(135.049, 53.549), (73.661, 3.861), (135.049, 3.861)] {
        let original = Coordinate::new(lon, lat).unwrap();
        assert!(!original.is_out_of_china());

        let gcj = wgs84_to_gcj02(original);
        assert_ne!(gcj, original, "no shift at {},{}", lon, lat);
        assert!(Coordinate::new(gcj.longitude(), gcj.latitude()).is_ok());

        let wgs = gcj02_to_wgs84(original);
        assert_ne!(wgs, original, "no inverse shift at {},{}", lon, lat);
    }
}

#[test]
fn test_round_trip_within_fifty_meters() {
    for (lon, lat) in [
        (116.3915, 39.9042),
        (121.4737, 31.2304),
        (113.2644, 23.1291),
        (87.6168, 43.8256),
        (91.1172, 29.6469),
    ] {
        let original = Coordinate::new(lon, lat).unwrap();
        let back = gcj02_to_wgs84(wgs84_to_gcj02(original));
        assert!((back.longitude() - lon).abs() < 0.000833, "lon drift at {},{}", lon, lat);
        assert!((back.latitude() - lat).abs() < 0.000833, "lat drift at {},{}", lon, lat);
    }
}

#[test]
fn test_coordinate_system_dispatch() {
    let c = Coordinate::new(116.3915, 39.9042).unwrap();
    assert_eq!(CoordinateSystem::Wgs84.convert(c, CoordinateSystem::Gcj02), wgs84_to_gcj02(c));
    assert_eq!(CoordinateSystem::Gcj02.convert(c, CoordinateSystem::Wgs84), gcj02_to_wgs84(c));
    assert_eq!(CoordinateSystem::Gcj02.convert(c, CoordinateSystem::Gcj02), c);
}

#[test]
fn test_coordinate_system_parsing() {
    assert_eq!(CoordinateSystemFactory::from_string("WGS84").unwrap(), CoordinateSystem::Wgs84);
    assert_eq!(CoordinateSystemFactory::from_string("epsg:4326").unwrap(), CoordinateSystem::Wgs84);
    assert_eq!("gcj-02".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Gcj02);
    assert_eq!("Mars".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Gcj02);
    assert!(matches!(
        CoordinateSystemFactory::from_string("bd09"),
        Err(GeoError::UnknownCoordinateSystem(_))
    ));
}

#[test]
fn test_transform_all_preserves_order() {
    let points = vec![
        Coordinate::new(116.3915, 39.9042).unwrap(),
        Coordinate::new(139.6917, 35.6895).unwrap(),
    ];
    let out = CoordinateTransformer.transform_all(&points, CoordinateSystem::Wgs84, CoordinateSystem::Gcj02);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], wgs84_to_gcj02(points[0]));
    assert_eq!(out[1], points[1]);
}
