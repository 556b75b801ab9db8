//! Core data model: stored locations, weather readings, result rows

use serde::{Deserialize, Deserializer, Serialize};

/// A curated location record from the dataset
///
/// Coordinates in the dataset file may appear as JSON numbers or as decimal
/// strings; both forms deserialize to `f64`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Opaque record id
    pub id: u64,
    /// Location name
    pub name: String,
    /// Latitude in decimal degrees
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
    /// Country grouping label, zero or one per location
    #[serde(default)]
    pub country: Option<String>,
    /// Whether the record is visible to search
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// Accept `48.8566`, `"48.8566"` or an absent field
fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse::<f64>().map(Some).map_err(|_| {
                    serde::de::Error::custom(format!("invalid coordinate value: '{text}'"))
                })
            }
        }
    }
}

impl Location {
    /// Create a new published location
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            country: None,
            published: true,
        }
    }

    /// Attach a country label
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// A location is only searchable when both coordinates are stored
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Classification of a single weather-fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchOutcome {
    /// Provider returned a temperature
    Success,
    /// Provider responded but knows no such place
    NotFound,
    /// Transport failure, non-2xx status or unparseable body
    ProviderError,
    /// No API credential configured; no request was made
    Unconfigured,
}

/// One ephemeral reading from the weather provider
///
/// Readings are constructed per search request and discarded after
/// rendering; they are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Place name as resolved by the provider (may differ from the stored name)
    pub place_name: Option<String>,
    /// Current temperature in degrees Celsius
    pub temperature: Option<f64>,
    /// Fetch outcome classification
    pub outcome: FetchOutcome,
}

impl WeatherReading {
    /// A successful reading with the provider's resolved name
    #[must_use]
    pub fn success(place_name: impl Into<String>, temperature: f64) -> Self {
        Self {
            place_name: Some(place_name.into()),
            temperature: Some(temperature),
            outcome: FetchOutcome::Success,
        }
    }

    /// Provider responded but had no data for the place
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            place_name: None,
            temperature: None,
            outcome: FetchOutcome::NotFound,
        }
    }

    /// Transport or provider failure
    #[must_use]
    pub fn provider_error() -> Self {
        Self {
            place_name: None,
            temperature: None,
            outcome: FetchOutcome::ProviderError,
        }
    }

    /// No credential configured
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            place_name: None,
            temperature: None,
            outcome: FetchOutcome::Unconfigured,
        }
    }
}

/// One row of an enriched search result: the stored location joined with
/// its weather reading, in store order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRow {
    /// Country grouping label, blank in the rendering when absent
    pub country: Option<String>,
    /// Stored location name
    pub name: String,
    /// The reading fetched for this row
    pub reading: WeatherReading,
}

impl CityRow {
    /// Join a stored location with its reading
    #[must_use]
    pub fn new(location: &Location, reading: WeatherReading) -> Self {
        Self {
            country: location.country.clone(),
            name: location.name.clone(),
            reading,
        }
    }
}
