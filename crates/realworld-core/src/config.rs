use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub use realworld_weather::TemperatureUnit;

use crate::error::ConfigError;

/// Environment variables that override the stored API keys
pub const MARVEL_KEY_ENV: &str = "MARVEL_API_PUBLIC";
pub const SPOONACULAR_KEY_ENV: &str = "SPOONACULAR_API";
pub const OPENWEATHER_KEY_ENV: &str = "OPENWEATHER_API";

const DEFAULT_PAGE_SIZE: u32 = 20;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Marvel comics API
    #[serde(default = "ApiSettings::marvel")]
    pub marvel: ApiSettings,

    /// Spoonacular recipe API
    #[serde(default = "ApiSettings::spoonacular")]
    pub recipes: ApiSettings,

    /// OpenWeatherMap settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// Endpoint and key for one remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,

    /// Public API key (can be set via environment)
    #[serde(default)]
    pub api_key: String,

    /// Items per page for paged collections
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl ApiSettings {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn marvel() -> Self {
        Self::new("https://gateway.marvel.com/v1/public")
    }

    pub fn spoonacular() -> Self {
        Self::new("https://api.spoonacular.com")
    }

    pub fn openweather() -> Self {
        Self::new("https://api.openweathermap.org")
    }

    /// Check if a key is configured (not a placeholder)
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_key.starts_with("YOUR_")
    }
}

/// A fixed position used when no location source is available
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Temperature unit preference
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    #[serde(default = "ApiSettings::openweather")]
    pub api: ApiSettings,

    /// Default coordinates for the weather lookup
    #[serde(default)]
    pub location: Option<Coordinates>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Celsius,
            api: ApiSettings::openweather(),
            location: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marvel: ApiSettings::marvel(),
            recipes: ApiSettings::spoonacular(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist.
    /// Environment keys override whatever the file holds.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            config
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Validate and hand the configuration back, logging any warnings.
    ///
    /// Fails with every critical error joined into one message.
    pub fn into_validated(self) -> Result<Self, ConfigError> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(self)
    }

    /// Replace API keys with values found through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets = [
            (MARVEL_KEY_ENV, &mut self.marvel),
            (SPOONACULAR_KEY_ENV, &mut self.recipes),
            (OPENWEATHER_KEY_ENV, &mut self.weather.api),
        ];

        for (name, settings) in targets {
            if let Some(key) = lookup(name).filter(|k| !k.is_empty()) {
                tracing::debug!("Using API key from {}", name);
                settings.api_key = key;
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        for (section, settings) in [
            ("marvel", &self.marvel),
            ("recipes", &self.recipes),
            ("weather.api", &self.weather.api),
        ] {
            Self::validate_api(section, settings, &mut result);
        }

        if let Some(coords) = self.weather.location {
            if !(-90.0..=90.0).contains(&coords.latitude) {
                result.add_error(
                    "weather.location.latitude",
                    "Latitude must be between -90 and 90",
                );
            }
            if !(-180.0..=180.0).contains(&coords.longitude) {
                result.add_error(
                    "weather.location.longitude",
                    "Longitude must be between -180 and 180",
                );
            }
        }

        result
    }

    fn validate_api(section: &str, settings: &ApiSettings, result: &mut ValidationResult) {
        Self::validate_url(
            &settings.base_url,
            &format!("{}.base_url", section),
            result,
        );

        if settings.page_size == 0 {
            result.add_error(
                format!("{}.page_size", section),
                "Page size must be greater than 0",
            );
        } else if settings.page_size > 100 {
            result.add_warning(
                format!("{}.page_size", section),
                "Page size above 100 is rejected by most APIs",
            );
        }

        if !settings.is_configured() {
            result.add_warning(
                format!("{}.api_key", section),
                "API key not configured - requests will be rejected",
            );
        }
    }

    fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.query().is_some() {
                    result.add_error(field_name, "Base URL must not carry a query string");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("realworld");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.marvel.api_key = "marvel-key".into();
        config.recipes.api_key = "spoon-key".into();
        config.weather.api.api_key = "owm-key".into();
        config
    }

    #[test]
    fn test_default_config_is_valid_with_key_warnings() {
        let result = Config::default().validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.iter().any(|w| w.field == "marvel.api_key"));
        assert!(result.warnings.iter().any(|w| w.field == "recipes.api_key"));
    }

    #[test]
    fn test_configured_config_has_no_warnings() {
        let result = configured().validate();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_invalid_url() {
        let mut config = configured();
        config.marvel.base_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "marvel.base_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = configured();
        config.recipes.base_url = "ftp://api.spoonacular.com".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_base_url_with_query_rejected() {
        let mut config = configured();
        config.marvel.base_url = "https://gateway.marvel.com/v1/public?apikey=x".to_string();
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.message.contains("query string")));
    }

    #[test]
    fn test_zero_page_size() {
        let mut config = configured();
        config.marvel.page_size = 0;
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "marvel.page_size"));
    }

    #[test]
    fn test_out_of_range_location() {
        let mut config = configured();
        config.weather.location = Some(Coordinates {
            latitude: 91.0,
            longitude: -0.1278,
        });
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "weather.location.latitude"));
        assert!(!result.errors.iter().any(|e| e.field == "weather.location.longitude"));
    }

    #[test]
    fn test_placeholder_key_not_configured() {
        let mut settings = ApiSettings::marvel();
        settings.api_key = "YOUR_MARVEL_KEY".into();
        assert!(!settings.is_configured());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(|name| match name {
            MARVEL_KEY_ENV => Some("from-env".to_string()),
            SPOONACULAR_KEY_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.marvel.api_key, "from-env");
        assert_eq!(config.recipes.api_key, "");
        assert_eq!(config.weather.api.api_key, "");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = configured();
        config.weather.temperature_unit = TemperatureUnit::Fahrenheit;
        config.weather.location = Some(Coordinates {
            latitude: 51.5074,
            longitude: -0.1278,
        });
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.marvel, config.marvel);
        assert_eq!(loaded.weather.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(loaded.weather.location, config.weather.location);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[marvel]\nbase_url = \"http://localhost:8080\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.marvel.base_url, "http://localhost:8080");
        assert_eq!(loaded.marvel.page_size, 20);
        assert_eq!(loaded.recipes, ApiSettings::spoonacular());
        assert_eq!(loaded.weather.temperature_unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_unknown_temperature_unit_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather]\ntemperature_unit = \"auto\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_into_validated_accepts_warnings() {
        let config = Config::default().into_validated().unwrap();
        assert_eq!(config.marvel, ApiSettings::marvel());
    }

    #[test]
    fn test_into_validated_rejects_errors() {
        let mut config = configured();
        config.marvel.page_size = 0;
        config.recipes.base_url = "not-a-url".to_string();

        let err = config.into_validated().unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(message.contains("marvel.page_size"), "{}", message);
        assert!(message.contains("recipes.base_url"), "{}", message);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
