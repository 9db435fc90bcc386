//! Configuration system
//!
//! Settings structs implement [`Config`] to load from and save to TOML or
//! RON files, chosen by file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Serialization format selected from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format for `path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration text in the given format
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input.
    fn from_str_as(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            ConfigFormat::Ron => {
                ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
        }
    }

    /// Serialize configuration in the given format
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if the value cannot be represented.
    fn to_string_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on unsupported extensions, I/O failure or parse failure.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_str_as(&contents, format)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from file, falling back to defaults if it is missing
    ///
    /// # Errors
    ///
    /// Same as [`Config::load_from_file`], except a missing file is not an error.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::info!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on unsupported extensions, serialization or I/O failure.
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_string_as(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct WindowSettings {
        title: String,
        width: u32,
        scale: f32,
        vsync: bool,
    }

    impl Default for WindowSettings {
        fn default() -> Self {
            Self {
                title: "glyph batch".to_string(),
                width: 800,
                scale: 1.0,
                vsync: true,
            }
        }
    }

    impl Config for WindowSettings {}

    fn custom_settings() -> WindowSettings {
        WindowSettings {
            title: "round trip".to_string(),
            width: 1920,
            scale: 1.5,
            vsync: false,
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glyph_batch_config_test_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_string_round_trip_both_formats() {
        let settings = custom_settings();
        for format in [ConfigFormat::Toml, ConfigFormat::Ron] {
            let text = settings.to_string_as(format).unwrap();
            let parsed = WindowSettings::from_str_as(&text, format).unwrap();
            assert_eq!(parsed, settings, "{format:?}");
        }
    }

    #[test]
    fn test_save_then_load_both_formats() {
        let dir = temp_dir("save_load");
        let settings = custom_settings();

        for file in ["window.toml", "window.ron"] {
            let path = dir.join(file);
            settings.save_to_file(&path).unwrap();
            assert_eq!(WindowSettings::load_from_file(&path).unwrap(), settings);
            assert_eq!(WindowSettings::load_or_default(&path).unwrap(), settings);
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = temp_dir("missing");
        let path = dir.join("absent.toml");

        assert_eq!(WindowSettings::load_or_default(&path).unwrap(), WindowSettings::default());
        assert!(matches!(WindowSettings::load_from_file(&path), Err(ConfigError::Io(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_error_and_unsupported_save() {
        assert!(matches!(
            WindowSettings::from_str_as("width = \"wide\"", ConfigFormat::Toml),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            custom_settings().save_to_file("window.json"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("b.ron")).unwrap(), ConfigFormat::Ron);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("b.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
