//! # In-Memory Catalog
//!
//! The only [`CafeRepository`] implementation. It is built once at startup,
//! either from the built-in dataset or from a JSON file, and is read-only
//! afterwards.
//!
//! Fields may not contain a comma: the rendered payload uses it to separate
//! entries, so such a dataset is rejected when the catalog is built.
//!
//! Dataset file format:
//!
//! ```json
//! { "moscow": [ { "name": "Мир кофе", "address": "Тверская ул. 3" } ] }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use tracing::warn;

use cafe_common::models::cafe::{Cafe, CityKey, ENTRY_SEPARATOR};
use cafe_common::repository::CafeRepository;

use crate::dataset;

#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    buckets: HashMap<CityKey, Vec<Cafe>>,
}

impl InMemoryCatalog {
    /// Builds a catalog from `(city, cafés)` pairs.
    ///
    /// City names go through [`CityKey::new`]. Names that normalize to the
    /// same key are merged in iteration order; blank names are skipped.
    /// Fails on the first café with a comma in its name or address.
    pub fn from_entries<I, S>(entries: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<Cafe>)>,
        S: AsRef<str>,
    {
        let mut buckets: HashMap<CityKey, Vec<Cafe>> = HashMap::new();
        for (city, cafes) in entries {
            let Some(key) = CityKey::new(city.as_ref()) else {
                warn!("Skipping {} cafés with a blank city name", cafes.len());
                continue;
            };
            if let Some(cafe) = cafes.iter().find(|cafe| !cafe.is_renderable()) {
                bail!(
                    "{key}: café \"{}\" at \"{}\" contains '{ENTRY_SEPARATOR}'",
                    cafe.name,
                    cafe.address
                );
            }
            buckets.entry(key).or_default().extend(cafes);
        }
        Ok(Self { buckets })
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_entries(dataset::builtin()).context("building built-in dataset")
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let raw: BTreeMap<String, Vec<Cafe>> =
            serde_json::from_str(json).context("parsing café dataset")?;
        Self::from_entries(raw)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading café dataset {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("loading {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl CafeRepository for InMemoryCatalog {
    fn cafes(&self, city: &CityKey) -> Option<&[Cafe]> {
        self.buckets.get(city).map(Vec::as_slice)
    }

    fn cities(&self) -> Vec<&CityKey> {
        let mut cities: Vec<&CityKey> = self.buckets.keys().collect();
        cities.sort();
        cities
    }
}
