//! `CityWeather` - incremental city search with live weather enrichment
//!
//! This library provides the search-and-enrich pipeline: a prefix-filtered
//! lookup over a curated location dataset, per-row current-temperature
//! enrichment from OpenWeatherMap, and HTML fragment rendering for the
//! search-as-you-type frontend.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod search;
pub mod store;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use cache::ReadingCache;
pub use config::CityWeatherConfig;
pub use error::CityWeatherError;
pub use models::{CityRow, FetchOutcome, Location, WeatherReading};
pub use search::SearchService;
pub use store::LocationStore;
pub use weather::WeatherClient;
pub use web::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CityWeatherError>;
