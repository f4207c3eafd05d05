//! # Domain Models
//!
//! * [`cafe::Cafe`]: a single café belonging to one city.
//! * [`cafe::CityKey`]: a city name after normalization.
//! * [`query::CafeQuery`]: the raw parameters of one lookup.
//! * [`query::CafeCount`] and [`query::SearchTerm`]: the typed forms of the
//!   optional parameters.

pub mod cafe;
pub mod query;
