use std::fmt;

use serde::{Deserialize, Serialize};

/// Separates entries in a rendered payload. Never allowed inside a field.
pub const ENTRY_SEPARATOR: char = ',';

/// A café record. Belongs to exactly one city bucket.
///
/// Renders as `name (address)`, so a payload split on [`ENTRY_SEPARATOR`]
/// yields one piece per café.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    pub name: String,
    pub address: String,
}

impl Cafe {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// True when neither field contains [`ENTRY_SEPARATOR`].
    pub fn is_renderable(&self) -> bool {
        !self.name.contains(ENTRY_SEPARATOR) && !self.address.contains(ENTRY_SEPARATOR)
    }
}

impl fmt::Display for Cafe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// A city name in the normalized form used as a catalog key.
///
/// Normalization is `trim` followed by Unicode lowercase. The catalog and the
/// resolver both go through [`CityKey::new`], so "Moscow", " moscow " and
/// "MOSCOW" all land on the same bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityKey(String);

impl CityKey {
    /// Normalizes `raw`. Returns `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
