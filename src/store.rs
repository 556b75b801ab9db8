//! Read-only query surface over the curated location dataset
//!
//! The dataset is loaded once at startup and never mutated at runtime;
//! records are created and edited by an external curation step.

use crate::models::Location;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// In-memory location store, preserving dataset order
pub struct LocationStore {
    locations: Vec<Location>,
}

impl LocationStore {
    /// Load the dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read location dataset: {}", path.display()))?;

        let locations: Vec<Location> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse location dataset: {}", path.display()))?;

        info!(
            "Loaded {} locations from {}",
            locations.len(),
            path.display()
        );

        Ok(Self { locations })
    }

    /// Build a store from already-parsed records
    #[must_use]
    pub fn from_records(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Number of records in the dataset, eligible or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Find locations whose name or country label starts with `term`,
    /// case-insensitively. An empty term matches every eligible record.
    ///
    /// Only published records with both coordinates stored are eligible.
    /// The match is anchored to the start of the field, not a substring
    /// scan, and results keep the dataset's insertion order. Never fails;
    /// no match yields an empty vec.
    #[must_use]
    pub fn find_matching(&self, term: &str) -> Vec<Location> {
        let needle = term.to_lowercase();

        let matches: Vec<Location> = self
            .locations
            .iter()
            .filter(|location| location.published && location.has_coordinates())
            .filter(|location| {
                if needle.is_empty() {
                    return true;
                }
                starts_with_ci(&location.name, &needle)
                    || location
                        .country
                        .as_deref()
                        .is_some_and(|country| starts_with_ci(country, &needle))
            })
            .cloned()
            .collect();

        debug!("Term '{}' matched {} locations", term, matches.len());
        matches
    }
}

/// Case-insensitive prefix check; `needle` is already lowercased
fn starts_with_ci(field: &str, needle: &str) -> bool {
    field.to_lowercase().starts_with(needle)
}
