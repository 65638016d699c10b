//! Integration tests for the public conversion API

use std::io::Write;

use gcjkit::{
    from_dms, gcj02_to_wgs84, to_dms, wgs84_to_gcj02, Coordinate, CoordinateSystem, GeoError,
    Settings,
};
use gcjkit::config::OutputFormat;
use gcjkit::utils::format_utils::format_coordinate;

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[test]
fn test_reference_dms_formatting() {
    assert_eq!(to_dms(116.3915, false).unwrap(), "116°23'29.40\"E");
    assert_eq!(to_dms(39.9042, true).unwrap(), "39°54'15.12\"N");
    assert_eq!(to_dms(-79.3832, true).unwrap(), "79°22'59.52\"S");
    assert!(to_dms(181.0, false).is_none());
}

#[test]
fn test_dms_formatting_follows_decimal_digits() {
    assert_eq!(to_dms(1.4, true).unwrap(), "1°24'0.00\"N");
    assert_eq!(to_dms(22.4, false).unwrap(), "22°24'0.00\"E");
    assert_eq!(to_dms(0.0016875, true).unwrap(), "0°0'6.08\"N");
}

#[test]
fn test_reference_dms_parsing() {
    let value = from_dms("116°23'29.40\"E").unwrap();
    assert_eq!(round_to(value, 4), 116.3915);
}

#[test]
fn test_reference_conversions_in_beijing() {
    let beijing = Coordinate::new(116.3915, 39.9042).unwrap();

    let gcj = wgs84_to_gcj02(beijing);
    assert_eq!(round_to(gcj.longitude(), 6), 116.397741);
    assert_eq!(round_to(gcj.latitude(), 6), 39.905601);

    let wgs = gcj02_to_wgs84(beijing);
    assert_eq!(round_to(wgs.longitude(), 6), 116.385259);
    assert_eq!(round_to(wgs.latitude(), 6), 39.902799);
}

#[test]
fn test_tokyo_is_left_alone() {
    let tokyo = Coordinate::new(139.6917, 35.6895).unwrap();
    assert!(tokyo.is_out_of_china());
    assert_eq!(wgs84_to_gcj02(tokyo), tokyo);
    assert_eq!(gcj02_to_wgs84(tokyo), tokyo);
}

#[test]
fn test_round_trip_grid_inside_china() {
    let mut lon = 74.0;
    while lon < 135.0 {
        let mut lat = 4.0;
        while lat < 53.5 {
            let original = Coordinate::new(lon, lat).unwrap();
            let back = gcj02_to_wgs84(wgs84_to_gcj02(original));
            assert!((back.longitude() - lon).abs() < 0.000833, "lon drift at {},{}", lon, lat);
            assert!((back.latitude() - lat).abs() < 0.000833, "lat drift at {},{}", lon, lat);
            lat += 3.7;
        }
        lon += 4.3;
    }
}

#[test]
fn test_range_validation() {
    assert!(matches!(Coordinate::new(-180.1, 0.0), Err(GeoError::OutOfRange { .. })));
    assert!(matches!(Coordinate::new(0.0, 90.1), Err(GeoError::OutOfRange { .. })));
}

#[test]
fn test_dms_coordinate_pipeline() {
    let coord = Coordinate::from_dms("121°28'25.32\"E", "31°13'49.44\"N").unwrap();
    let gcj = CoordinateSystem::Wgs84.convert(coord, CoordinateSystem::Gcj02);
    assert!(gcj.longitude() > coord.longitude());
    assert!(gcj.latitude() < coord.latitude());

    let settings = Settings { output_format: OutputFormat::Dms, ..Settings::default() };
    let rendered = format_coordinate(&gcj, &settings);
    let mut parts = rendered.split(' ');
    let back = Coordinate::from_dms(parts.next().unwrap(), parts.next().unwrap()).unwrap();
    assert!((back.longitude() - gcj.longitude()).abs() < 0.00001);
    assert!((back.latitude() - gcj.latitude()).abs() < 0.00001);
}

#[test]
fn test_settings_file_drives_formatting() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "precision = 2\noutput_format = \"decimal\"").unwrap();
    let settings = Settings::from_file(file.path().to_str().unwrap()).unwrap();

    let coord = Coordinate::new(116.3915, 39.9042).unwrap();
    assert_eq!(format_coordinate(&coord, &settings), "116.39,39.90");
}
