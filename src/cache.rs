//! Optional TTL cache for weather readings
//!
//! Keyed by location name and disabled unless a TTL is configured; with no
//! cache in play every search performs live provider calls. Readings stay
//! ephemeral either way: entries expire after the TTL and the cache never
//! touches disk.

use crate::models::WeatherReading;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct StoredEntry {
    value: WeatherReading,
    expires_at: Instant,
}

/// In-memory reading cache with a fixed time-to-live
pub struct ReadingCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl ReadingCache {
    /// Create a cache whose entries expire after `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a reading under a location name.
    pub async fn put(&self, key: &str, value: WeatherReading) {
        let entry = StoredEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }

    /// Retrieves a reading if it exists and has not expired.
    /// Returns `None` for cache misses or expired entries.
    pub async fn get(&self, key: &str) -> Option<WeatherReading> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    tracing::debug!("Reading for '{}' found and still fresh", key);
                    return Some(entry.value.clone());
                }
                Some(_) => {
                    tracing::debug!("Reading for '{}' found but expired", key);
                }
                None => {
                    tracing::debug!("No cached reading for '{}'", key);
                    return None;
                }
            }
        }

        self.entries.write().await.remove(key);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherReading;

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = ReadingCache::new(Duration::from_secs(60));
        cache.put("Paris", WeatherReading::success("Paris", 21.5)).await;

        let hit = cache.get("Paris").await.unwrap();
        assert_eq!(hit.temperature, Some(21.5));
        assert!(cache.get("Lyon").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_dropped() {
        let cache = ReadingCache::new(Duration::from_millis(10));
        cache.put("Paris", WeatherReading::success("Paris", 21.5)).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get("Paris").await.is_none());
        // The expired entry is gone, not just hidden
        assert!(cache.entries.read().await.is_empty());
    }
}
