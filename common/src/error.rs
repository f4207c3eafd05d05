use thiserror::Error;

/// Reasons a café query is rejected.
///
/// Both kinds are caller faults. The `Display` text is the exact message
/// returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `city` was missing, blank, or not present in the catalog.
    #[error("unknown city")]
    UnknownCity,
    /// `count` was present but not a base-10 non-negative integer.
    #[error("incorrect count")]
    InvalidCount,
}
