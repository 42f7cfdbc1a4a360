use std::path::{Path, PathBuf};

use propgen_generate::SampleOptions;
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "propgen.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub log_format: LogFormat,
    pub sample: SampleOptions,
    pub exhaustive: ExhaustiveSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            sample: SampleOptions::default(),
            exhaustive: ExhaustiveSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustiveSettings {
    pub seed: u64,
    /// Largest combination count `exhaustive` will build.
    pub max_combinations: u64,
}

impl Default for ExhaustiveSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            max_combinations: 100_000,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Load settings from `explicit`, or from [`DEFAULT_SETTINGS_FILE`] when it
/// exists. A missing default file yields defaults; a missing explicit file
/// is an error.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(SettingsError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };
    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = parse_settings("").expect("parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.sample.times, 20);
        assert_eq!(settings.sample.max_size, 10);
        assert_eq!(settings.exhaustive.max_combinations, 100_000);
    }

    #[test]
    fn reads_partial_sections() {
        let settings = parse_settings(
            r#"
log_format = "json"

[sample]
times = 5
seed = 42

[exhaustive]
max_combinations = 64
"#,
        )
        .expect("parse");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.sample.times, 5);
        assert_eq!(settings.sample.max_size, 10);
        assert_eq!(settings.sample.seed, Some(42));
        assert_eq!(settings.exhaustive.seed, 0);
        assert_eq!(settings.exhaustive.max_combinations, 64);
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(parse_settings("log_format = \"xml\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new("definitely/not/here/propgen.toml");
        assert!(matches!(
            load_settings(Some(path)),
            Err(SettingsError::NotFound(_))
        ));
    }
}
