//! Configuration management for the `CityWeather` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::CityWeatherError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `CityWeather` service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CityWeatherConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Location dataset configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Search pipeline configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key; absence is a valid state and yields
    /// unconfigured readings instead of provider calls
    pub api_key: Option<String>,
    /// Base URL for the provider API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (single attempt, no retries)
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Optional TTL in seconds for caching successful readings by city
    /// name; unset means every search performs live calls
    pub cache_ttl_seconds: Option<u64>,
}

/// Location dataset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the curated locations JSON file
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

/// Search pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of concurrent provider calls per search request
    #[serde(default = "default_search_concurrency")]
    pub concurrency: usize,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the search endpoint binds to
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_dataset_path() -> String {
    "data/locations.json".to_string()
}

fn default_search_concurrency() -> usize {
    4
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
            cache_ttl_seconds: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_search_concurrency(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl CityWeatherConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with CITYWEATHER_ prefix,
        // e.g. CITYWEATHER_WEATHER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("CITYWEATHER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: CityWeatherConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cityweather").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the API credential shape, if one is supplied
    fn validate_api_key(&self) -> Result<()> {
        // A missing key is a valid configuration state: searches still run
        // and every row renders the unconfigured sentinel
        if let Some(api_key) = &self.weather.api_key {
            if api_key.is_empty() {
                return Err(CityWeatherError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() < 8 {
                return Err(CityWeatherError::config(
                    "Weather API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }

            if api_key.len() > 100 {
                return Err(CityWeatherError::config(
                    "Weather API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(CityWeatherError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.search.concurrency == 0 || self.search.concurrency > 32 {
            return Err(
                CityWeatherError::config("Search concurrency must be between 1 and 32").into(),
            );
        }

        if let Some(ttl) = self.weather.cache_ttl_seconds {
            if ttl == 0 || ttl > 86_400 {
                return Err(CityWeatherError::config(
                    "Weather cache TTL must be between 1 second and 24 hours",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(CityWeatherError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(CityWeatherError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.store.dataset_path.is_empty() {
            return Err(CityWeatherError::config("Location dataset path cannot be empty").into());
        }

        Ok(())
    }
}
