//! Runtime settings loaded from TOML
//!
//! Settings control how the command line tool renders results and where it
//! logs. The library functions themselves take no configuration.

use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::LevelFilter;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the bundled defaults once
    static ref BUILTIN_SETTINGS: Settings = {
        let content = include_str!("../gcjkit.toml");
        Settings::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in settings: {}", e);
            Settings::default()
        })
    };
}

/// Largest number of decimal places accepted for `precision`
pub const MAX_PRECISION: u8 = 15;

/// How coordinates are rendered on output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Signed decimal degrees, "lon,lat"
    Decimal,
    /// Degree-minute-second text per axis
    Dms,
}

impl FromStr for OutputFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" => Ok(OutputFormat::Decimal),
            "dms" => Ok(OutputFormat::Dms),
            other => Err(GeoError::InvalidConfig(format!("Unknown output_format: {}", other))),
        }
    }
}

/// Settings for the command line tool
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Decimal places when printing decimal degrees
    pub precision: u8,
    /// Output rendering
    pub output_format: OutputFormat,
    /// Path of the log file
    pub log_file: String,
    /// Maximum log level
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            precision: 6,
            output_format: OutputFormat::Decimal,
            log_file: "gcjkit.log".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Settings bundled with the crate
    pub fn builtin() -> Settings {
        BUILTIN_SETTINGS.clone()
    }

    /// Parse settings from a TOML string
    ///
    /// Keys that are absent keep their built-in default values.
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::InvalidConfig(format!("Failed to parse TOML: {}", e))),
        };

        let mut settings = Settings::default();

        if let Some(value) = toml_value.get("precision") {
            let precision = value.as_integer()
                .ok_or_else(|| GeoError::InvalidConfig("precision must be an integer".to_string()))?;
            if precision < 0 || precision > MAX_PRECISION as i64 {
                return Err(GeoError::InvalidConfig(format!(
                    "precision must be between 0 and {}, got {}", MAX_PRECISION, precision
                )));
            }
            settings.precision = precision as u8;
        }

        if let Some(value) = toml_value.get("output_format") {
            let format = value.as_str()
                .ok_or_else(|| GeoError::InvalidConfig("output_format must be a string".to_string()))?;
            settings.output_format = format.parse()?;
        }

        if let Some(value) = toml_value.get("log_file") {
            settings.log_file = value.as_str()
                .ok_or_else(|| GeoError::InvalidConfig("log_file must be a string".to_string()))?
                .to_string();
        }

        if let Some(value) = toml_value.get("log_level") {
            let level = value.as_str()
                .ok_or_else(|| GeoError::InvalidConfig("log_level must be a string".to_string()))?;
            settings.log_level = LevelFilter::from_str(level)
                .map_err(|_| GeoError::InvalidConfig(format!("Unknown log_level: {}", level)))?;
        }

        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_matches_defaults() {
        assert_eq!(Settings::builtin(), Settings::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let settings = Settings::from_str("output_format = \"DMS\"").unwrap();
        assert_eq!(settings.output_format, OutputFormat::Dms);
        assert_eq!(settings.precision, 6);
        assert_eq!(settings.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_full_document() {
        let settings = Settings::from_str(
            "precision = 3\noutput_format = \"decimal\"\nlog_file = \"out.log\"\nlog_level = \"debug\"\n",
        ).unwrap();
        assert_eq!(settings.precision, 3);
        assert_eq!(settings.log_file, "out.log");
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for doc in [
            "precision = 16",
            "precision = -1",
            "precision = \"six\"",
            "output_format = \"hex\"",
            "log_level = \"loud\"",
            "log_file = 3",
            "not toml at all ===",
        ] {
            assert!(
                matches!(Settings::from_str(doc), Err(GeoError::InvalidConfig(_))),
                "accepted {:?}", doc
            );
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision = 4").unwrap();
        let settings = Settings::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.precision, 4);

        assert!(matches!(
            Settings::from_file("/nonexistent/gcjkit.toml"),
            Err(GeoError::IoError(_))
        ));
    }
}
