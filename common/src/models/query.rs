//! # Query Parameters
//!
//! Request-scoped input of a café lookup.
//!
//! [`CafeQuery`] keeps the parameters exactly as the transport delivered them.
//! Turning them into typed values is left to the resolver so that it controls
//! the validation order (city first, then count).

use std::str::FromStr;

use crate::error::QueryError;
use crate::models::cafe::{Cafe, CityKey};

/// Raw parameters of one lookup, as delivered by a transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeQuery {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

impl CafeQuery {
    pub fn new(
        city: Option<String>,
        count: Option<String>,
        search: Option<String>,
    ) -> Self {
        Self { city, count, search }
    }

    /// Folds decoded query-string pairs into a `CafeQuery`.
    ///
    /// The first occurrence of a repeated key wins. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut query.city,
                "count" => &mut query.count,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Normalized city, or [`QueryError::UnknownCity`] when it is absent or blank.
    pub fn city_key(&self) -> Result<CityKey, QueryError> {
        self.city
            .as_deref()
            .and_then(CityKey::new)
            .ok_or(QueryError::UnknownCity)
    }

    pub fn count(&self) -> Result<CafeCount, QueryError> {
        CafeCount::parse(self.count.as_deref())
    }

    pub fn search_term(&self) -> Option<SearchTerm> {
        SearchTerm::new(self.search.as_deref())
    }
}

/// Upper bound on the number of returned cafés.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CafeCount {
    #[default]
    Unlimited,
    AtMost(usize),
}

impl CafeCount {
    /// Parses an optional raw `count`.
    ///
    /// Absent and empty both mean [`CafeCount::Unlimited`].
    pub fn parse(raw: Option<&str>) -> Result<Self, QueryError> {
        match raw {
            None | Some("") => Ok(Self::Unlimited),
            Some(s) => s.parse(),
        }
    }

    /// Maximum number of entries to keep.
    pub fn limit(self) -> usize {
        match self {
            Self::Unlimited => usize::MAX,
            Self::AtMost(n) => n,
        }
    }
}

impl FromStr for CafeCount {
    type Err = QueryError;

    /// Accepts base-10 non-negative integers only. Signs other than a leading
    /// `+`, whitespace and fractional values are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(Self::AtMost)
            .map_err(|_| QueryError::InvalidCount)
    }
}

/// Case-insensitive substring filter on café names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for an absent or empty search, which means no filtering.
    pub fn new(raw: Option<&str>) -> Option<Self> {
        match raw {
            None | Some("") => None,
            Some(s) => Some(Self(s.to_lowercase())),
        }
    }

    /// Only the name is searched, never the address.
    pub fn matches(&self, cafe: &Cafe) -> bool {
        cafe.name.to_lowercase().contains(&self.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
