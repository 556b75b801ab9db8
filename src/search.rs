//! The search-and-enrich pipeline
//!
//! Joins store matches with one weather reading per row. Enrichment calls
//! are independent of one another and run with bounded concurrency; output
//! order is the store's order by index, never completion order.

use crate::cache::ReadingCache;
use crate::models::{CityRow, FetchOutcome, WeatherReading};
use crate::store::LocationStore;
use crate::weather::WeatherClient;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::debug;

/// Stateless per-request search service over the shared store and client
pub struct SearchService {
    store: Arc<LocationStore>,
    weather: Arc<WeatherClient>,
    cache: Option<ReadingCache>,
    concurrency: usize,
}

impl SearchService {
    /// Create a search service with the given enrichment concurrency
    #[must_use]
    pub fn new(store: Arc<LocationStore>, weather: Arc<WeatherClient>, concurrency: usize) -> Self {
        Self {
            store,
            weather,
            cache: None,
            concurrency: concurrency.max(1),
        }
    }

    /// Enable the opt-in reading cache
    #[must_use]
    pub fn with_cache(mut self, cache: ReadingCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Run one search: filter the store, enrich each match with a reading
    ///
    /// The result always has exactly one row per store match, in store
    /// order. Provider failures surface as row outcomes, never as errors;
    /// zero matches yield an empty vec, which the renderer displays as its
    /// distinct no-matches state.
    pub async fn search(&self, term: &str) -> Vec<CityRow> {
        let matches = self.store.find_matching(term);
        if matches.is_empty() {
            debug!("No locations matched '{}'", term);
            return Vec::new();
        }

        debug!(
            "Enriching {} locations for '{}' ({} at a time)",
            matches.len(),
            term,
            self.concurrency
        );

        stream::iter(matches)
            .map(|location| async move {
                let reading = self.reading_for(&location.name).await;
                CityRow::new(&location, reading)
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// One reading per location name, via the cache when enabled
    async fn reading_for(&self, name: &str) -> WeatherReading {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(name).await {
                return hit;
            }
        }

        let reading = self.weather.fetch_temperature(name).await;

        // Only successful readings are worth keeping around
        if let Some(cache) = &self.cache {
            if reading.outcome == FetchOutcome::Success {
                cache.put(name, reading.clone()).await;
            }
        }

        reading
    }
}
