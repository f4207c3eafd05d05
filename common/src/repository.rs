use crate::models::cafe::{Cafe, CityKey};

/// Defines the contract for reading the café dataset.
///
/// Implementations are populated once and never mutated afterwards, so they
/// must be shareable across request tasks.
pub trait CafeRepository: Send + Sync {
    /// Returns the ordered city bucket for `city`.
    ///
    /// # Returns
    /// * `Some(&[Cafe])` - The cafés of the city, possibly empty.
    /// * `None` - If the city is not part of the dataset.
    fn cafes(&self, city: &CityKey) -> Option<&[Cafe]>;

    /// Lists every known city, sorted.
    fn cities(&self) -> Vec<&CityKey>;
}
