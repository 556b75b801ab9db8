//! Error types and handling for the `CityWeather` service

use thiserror::Error;

/// Main error type for the `CityWeather` service
#[derive(Error, Debug)]
pub enum CityWeatherError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Location store errors (dataset missing or unreadable)
    #[error("Store error: {message}")]
    Store { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl CityWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CityWeatherError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            CityWeatherError::Store { .. } => {
                "The location dataset could not be read. Please check its path and format."
                    .to_string()
            }
            CityWeatherError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            CityWeatherError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            CityWeatherError::General { message } => message.clone(),
        }
    }
}
