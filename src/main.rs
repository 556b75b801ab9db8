use anyhow::Result;
use cityweather::{
    AppState, CityWeatherConfig, LocationStore, ReadingCache, SearchService, WeatherClient,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = CityWeatherConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    if config.weather.api_key.is_none() {
        tracing::warn!("No weather API key configured; temperatures will render as N/A");
    }

    let store = Arc::new(LocationStore::load(&config.store.dataset_path)?);
    let weather = Arc::new(WeatherClient::new(&config.weather)?);

    let mut search = SearchService::new(store, weather, config.search.concurrency);
    if let Some(ttl) = config.weather.cache_ttl_seconds {
        tracing::info!("Weather reading cache enabled ({}s TTL)", ttl);
        search = search.with_cache(ReadingCache::new(Duration::from_secs(ttl)));
    }

    let state = AppState {
        search: Arc::new(search),
    };

    cityweather::web::run(config.server.port, state).await
}
