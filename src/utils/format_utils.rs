//! Output formatting utilities
//!
//! Renders coordinates according to the configured output settings.

use crate::config::{OutputFormat, Settings};
use crate::coordinate::{to_dms, Coordinate};

/// Render a coordinate as "lon,lat" text using the configured format
///
/// DMS output separates the two axes with a space.
pub fn format_coordinate(coord: &Coordinate, settings: &Settings) -> String {
    match settings.output_format {
        OutputFormat::Decimal => format!("{:.*}", settings.precision as usize, coord),
        OutputFormat::Dms => match coord.to_dms() {
            Some((lon, lat)) => format!("{} {}", lon, lat),
            // Valid coordinates always format; keep decimal as a fallback
            None => format!("{:.*}", settings.precision as usize, coord),
        },
    }
}

/// Render a single decimal-degree value using the configured format
pub fn format_degrees(value: f64, is_latitude: bool, settings: &Settings) -> Option<String> {
    match settings.output_format {
        OutputFormat::Decimal => Some(format!("{:.*}", settings.precision as usize, value)),
        OutputFormat::Dms => to_dms(value, is_latitude),
    }
}

/// Strip comments and surrounding whitespace from a batch input line
///
/// Returns `None` for lines with nothing left to parse.
pub fn clean_input_line(line: &str) -> Option<&str> {
    let content = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinate_decimal() {
        let settings = Settings { precision: 3, ..Settings::default() };
        let c = Coordinate::new(116.3915, 39.9042).unwrap();
        assert_eq!(format_coordinate(&c, &settings), "116.392,39.904");
    }

    #[test]
    fn test_format_coordinate_dms() {
        let settings = Settings { output_format: OutputFormat::Dms, ..Settings::default() };
        let c = Coordinate::new(116.3915, 39.9042).unwrap();
        assert_eq!(format_coordinate(&c, &settings), "116°23'29.40\"E 39°54'15.12\"N");
    }

    #[test]
    fn test_format_degrees() {
        let settings = Settings::default();
        assert_eq!(format_degrees(1.5, true, &settings).as_deref(), Some("1.500000"));
        let dms = Settings { output_format: OutputFormat::Dms, ..Settings::default() };
        assert_eq!(format_degrees(91.0, true, &dms), None);
    }

    #[test]
    fn test_clean_input_line() {
        assert_eq!(clean_input_line("  116.1,39.2  "), Some("116.1,39.2"));
        assert_eq!(clean_input_line("116.1,39.2 # office"), Some("116.1,39.2"));
        assert_eq!(clean_input_line("# header"), None);
        assert_eq!(clean_input_line("   "), None);
    }
}
