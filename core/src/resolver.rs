//! # Query Resolver
//!
//! Implements the café lookup use case.
//!
//! The resolver validates the raw parameters of a [`CafeQuery`], reads the
//! city bucket through the injected [`CafeRepository`] and applies the
//! optional name filter and count bound.

use std::sync::Arc;

use tracing::debug;

use cafe_common::error::QueryError;
use cafe_common::models::cafe::Cafe;
use cafe_common::models::query::CafeQuery;
use cafe_common::repository::CafeRepository;

/// Stateless lookup service. Cloning shares the underlying catalog.
#[derive(Clone)]
pub struct QueryResolver {
    catalog: Arc<dyn CafeRepository>,
}

impl QueryResolver {
    pub fn new(catalog: Arc<dyn CafeRepository>) -> Self {
        Self { catalog }
    }

    /// Resolves `query` against the catalog.
    ///
    /// Validation order:
    /// 1. **City**: must be non-blank and known, else [`QueryError::UnknownCity`].
    /// 2. **Count**: must parse when present, else [`QueryError::InvalidCount`].
    ///
    /// The result keeps the bucket order.
    pub fn resolve(&self, query: &CafeQuery) -> Result<Vec<Cafe>, QueryError> {
        let city = query.city_key()?;
        let bucket = self.catalog.cafes(&city).ok_or(QueryError::UnknownCity)?;
        let count = query.count()?;
        let search = query.search_term();

        let cafes: Vec<Cafe> = bucket
            .iter()
            .filter(|cafe| search.as_ref().is_none_or(|term| term.matches(cafe)))
            .take(count.limit())
            .cloned()
            .collect();

        debug!("{city}: {} of {} cafés selected", cafes.len(), bucket.len());
        Ok(cafes)
    }

    /// Resolves `query` and renders the result as the response payload.
    pub fn respond(&self, query: &CafeQuery) -> Result<String, QueryError> {
        self.resolve(query).map(|cafes| render(&cafes))
    }
}

/// Renders cafés as `name (address)` entries joined by `", "`.
///
/// Fields never contain a comma (the catalog rejects them), so splitting the
/// payload on `,` gives back one piece per café. An empty slice renders to an
/// empty string.
pub fn render(cafes: &[Cafe]) -> String {
    cafes
        .iter()
        .map(Cafe::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}
