//! Degree-minute-second text formatting and parsing
//!
//! The textual form is `D°M'S.ss"H`, where `H` is the hemisphere letter
//! (`N`/`S` for latitude, `E`/`W` for longitude) and seconds always carry
//! two fractional digits.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{Axis, GeoError, GeoResult};

const MAX_SCALE: usize = 30;

lazy_static! {
    static ref DMS_RE: Regex = Regex::new(
        r#"^\s*([^°'"]*)°([^°'"]*)'([^°'"]*)"\s*(\S)\s*$"#
    ).unwrap();
}

/// Format decimal degrees as DMS text
///
/// # Arguments
/// * `value` - Decimal degrees
/// * `is_latitude` - Selects the axis bound and the hemisphere letters
///
/// # Returns
/// The formatted string, or `None` when the value is beyond the axis bound
pub fn to_dms(value: f64, is_latitude: bool) -> Option<String> {
    let axis = if is_latitude { Axis::Latitude } else { Axis::Longitude };
    if !value.is_finite() || value.abs() > axis.bound() {
        return None;
    }

    let negative = value < 0.0;
    let (degrees, numerator, scale) = split_decimal(value.abs())?;

    // Exact decimal arithmetic on the shortest text form of the value, so
    // 1.4 yields 24 minutes rather than 23 minutes and 60 seconds
    let denominator = 10u128.pow(scale);
    let scaled = numerator * 60;
    let minutes = scaled / denominator;
    let rest = scaled % denominator;
    // Hundredths of a second, rounded half-up; 6000 (60.00) is emitted as-is
    let hundredths = (rest * 12_000 + denominator) / (2 * denominator);

    let hemisphere = match (is_latitude, negative) {
        (true, false) => 'N',
        (true, true) => 'S',
        (false, false) => 'E',
        (false, true) => 'W',
    };

    Some(format!(
        "{}°{}'{}.{:02}\"{}",
        degrees, minutes, hundredths / 100, hundredths % 100, hemisphere
    ))
}

/// Parse DMS text back to signed decimal degrees
///
/// Fails with `GeoError::MalformedDms` when a marker is missing, a field is
/// not numeric, the hemisphere letter is unknown, or the text is blank.
pub fn from_dms(text: &str) -> GeoResult<f64> {
    let malformed = || GeoError::MalformedDms(text.to_string());

    let caps = DMS_RE.captures(text).ok_or_else(malformed)?;

    let degrees = parse_field(&caps[1]).ok_or_else(malformed)?;
    let minutes = parse_field(&caps[2]).ok_or_else(malformed)?;
    let seconds = parse_field(&caps[3]).ok_or_else(malformed)?;

    let value = degrees + minutes / 60.0 + seconds / 3600.0;

    match caps[4].to_ascii_uppercase().as_str() {
        "N" | "E" => Ok(value),
        "S" | "W" => Ok(-value),
        _ => Err(malformed()),
    }
}

fn parse_field(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split a non-negative value into `(degrees, fraction digits, digit count)`
///
/// Fraction digits beyond `MAX_SCALE` are truncated.
fn split_decimal(value: f64) -> Option<(u32, u128, u32)> {
    // Display for f64 is the shortest round-trip form and never uses an exponent
    let text = format!("{}", value);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = &frac_part[..frac_part.len().min(MAX_SCALE)];

    let degrees = int_part.parse::<u32>().ok()?;
    let numerator = if frac_part.is_empty() {
        0
    } else {
        frac_part.parse::<u128>().ok()?
    };
    Some((degrees, numerator, frac_part.len() as u32))
}
