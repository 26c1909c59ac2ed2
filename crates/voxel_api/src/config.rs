//! Configuration for hosts and extensions built on the API.
//!
//! Settings are read from a TOML file. Every field has a default, so a file
//! may list only what it overrides.

use crate::command::CommandFormatter;
use crate::error::ConfigError;
use crate::text::{template, Text, TextColor};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Top-level settings.
///
/// Groups the text, command feedback and logging sections of the settings
/// file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Text templating settings
    #[serde(default)]
    pub text: TextSettings,
    /// Command feedback settings
    #[serde(default)]
    pub commands: CommandSettings,
    /// Logging configuration settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Text templating defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    /// Separator placed between items of rendered collections
    #[serde(default = "default_separator")]
    pub default_separator: String,
}

fn default_separator() -> String {
    template::DEFAULT_SEPARATOR.to_string()
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            default_separator: default_separator(),
        }
    }
}

impl TextSettings {
    /// The configured separator as literal text.
    pub fn separator(&self) -> Text {
        Text::of(self.default_separator.as_str())
    }
}

/// Colours for direct command feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommandSettings {
    /// Colour of error messages sent to a command source (e.g. "red")
    #[serde(default = "default_error_color")]
    pub error_color: TextColor,
    /// Colour of debug messages sent to a command source (e.g. "gray")
    #[serde(default = "default_debug_color")]
    pub debug_color: TextColor,
}

fn default_error_color() -> TextColor {
    TextColor::Red
}

fn default_debug_color() -> TextColor {
    TextColor::Gray
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            error_color: default_error_color(),
            debug_color: default_debug_color(),
        }
    }
}

impl CommandSettings {
    /// A formatter using the configured colours.
    pub fn formatter(&self) -> CommandFormatter {
        CommandFormatter::new(self.error_color, self.debug_color)
    }
}

/// Logging system configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Whether to output logs in JSON format
    #[serde(default)]
    pub json_format: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_format: false,
        }
    }
}

impl ApiSettings {
    /// Loads settings from a TOML file.
    ///
    /// If the file doesn't exist, writes the default settings to the given
    /// path and returns them.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    ///
    /// The loaded or default settings, or a [`ConfigError`] if reading,
    /// parsing, validation or writing the defaults failed.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await? {
            let content = tokio::fs::read_to_string(path).await?;
            let settings = Self::from_toml_str(&content)?;
            info!("Loaded API settings from {}", path.display());
            Ok(settings)
        } else {
            let defaults = Self::default();
            tokio::fs::write(path, toml::to_string_pretty(&defaults)?).await?;
            info!("Created default API settings file: {}", path.display());
            Ok(defaults)
        }
    }

    /// Parses and validates settings.
    ///
    /// # Arguments
    ///
    /// * `content` - TOML text; missing sections and fields take their defaults
    ///
    /// # Returns
    ///
    /// The settings, [`ConfigError::Parse`] for malformed TOML or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: ApiSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings for consistency.
    ///
    /// Checks that the collection separator is not empty and that the log
    /// level is one `tracing` understands.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the settings are usable, or [`ConfigError::Invalid`]
    /// describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.default_separator.is_empty() {
            return Err(ConfigError::Invalid(
                "text.default_separator cannot be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {valid_levels:?}",
                self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = ApiSettings::default();
        assert_eq!(settings.text.default_separator, ", ");
        assert_eq!(settings.commands.error_color, TextColor::Red);
        assert_eq!(settings.commands.debug_color, TextColor::Gray);
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.logging.json_format);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = ApiSettings::from_toml_str(
            r#"
[commands]
error_color = "dark_red"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(settings.commands.error_color, TextColor::DarkRed);
        assert_eq!(settings.commands.debug_color, TextColor::Gray);
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.text, TextSettings::default());
    }

    #[test]
    fn test_validation_errors() {
        let empty_separator = ApiSettings::from_toml_str("[text]\ndefault_separator = \"\"\n");
        assert!(matches!(empty_separator, Err(ConfigError::Invalid(_))));

        let bad_level = ApiSettings::from_toml_str("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(bad_level, Err(ConfigError::Invalid(_))));

        let bad_color = ApiSettings::from_toml_str("[commands]\nerror_color = \"pink\"\n");
        assert!(matches!(bad_color, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_settings_feed_formatting() {
        let settings = ApiSettings::from_toml_str("[text]\ndefault_separator = \" / \"\n").unwrap();
        assert_eq!(settings.text.separator().to_plain(), " / ");

        let formatter = settings.commands.formatter();
        assert_eq!(formatter, CommandFormatter::default());
    }

    #[tokio::test]
    async fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("voxel_api.toml");

        let settings = ApiSettings::load_from_file(&path).await.unwrap();
        assert_eq!(settings, ApiSettings::default());
        assert!(path.exists());

        let reloaded = ApiSettings::load_from_file(&path).await.unwrap();
        assert_eq!(reloaded, settings);
    }

    #[tokio::test]
    async fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        tokio::fs::write(&path, "[text]\ndefault_separator = \"; \"\n[logging]\njson_format = true\n")
            .await
            .unwrap();

        let settings = ApiSettings::load_from_file(&path).await.unwrap();
        assert_eq!(settings.text.default_separator, "; ");
        assert!(settings.logging.json_format);
        assert_eq!(settings.logging.level, "info");
    }
}
