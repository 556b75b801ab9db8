//! OpenWeatherMap client for current-temperature lookups
//!
//! One best-effort GET per invocation: no retries, no timeout beyond the
//! transport default configured on the client. Every failure mode is
//! classified into a [`WeatherReading`] outcome at this boundary; callers
//! always receive a reading, never an error.

use crate::config::WeatherConfig;
use crate::models::WeatherReading;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the weather provider
///
/// Credentials are passed in explicitly through [`WeatherConfig`]; a missing
/// API key is a normal state in which every fetch yields an unconfigured
/// reading without touching the network.
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    /// Create a new weather client from explicit configuration
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cityweather/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Whether a provider credential is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch the current temperature for a place name, in degrees Celsius
    ///
    /// The name is sent verbatim (URL-encoded) as the provider's `q`
    /// parameter. Never fails: transport errors and non-2xx statuses come
    /// back as provider-error readings, a 2xx body without a temperature as
    /// not-found, and a missing credential as unconfigured.
    pub async fn fetch_temperature(&self, name: &str) -> WeatherReading {
        let Some(api_key) = &self.api_key else {
            debug!("No weather API key configured, skipping lookup for '{}'", name);
            return WeatherReading::unconfigured();
        };

        let url = format!(
            "{}/weather?q={}&units=metric&appid={}",
            self.base_url,
            urlencoding::encode(name),
            api_key
        );

        debug!("Requesting current weather for '{}'", name);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Weather request for '{}' failed: {}", name, e);
                return WeatherReading::provider_error();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Weather request for '{}' returned HTTP {}", name, status);
            return WeatherReading::provider_error();
        }

        let body: openweather::CurrentResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Unparseable weather response for '{}': {}", name, e);
                return WeatherReading::provider_error();
            }
        };

        match body.main.and_then(|main| main.temp) {
            Some(temperature) => {
                let resolved = body.name.unwrap_or_else(|| name.to_string());
                debug!("Resolved '{}' as '{}' at {}°C", name, resolved, temperature);
                WeatherReading::success(resolved, temperature)
            }
            None => {
                debug!("Provider has no temperature for '{}'", name);
                WeatherReading::not_found()
            }
        }
    }
}

/// OpenWeatherMap current-weather response structures
mod openweather {
    use serde::Deserialize;

    /// Current weather response; only the fields the pipeline consumes
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        /// Place name as resolved by the provider
        pub name: Option<String>,
        /// Main measurement block; absent when the provider has no data
        pub main: Option<MainData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        /// Temperature in the requested units (metric here)
        pub temp: Option<f64>,
    }
}
