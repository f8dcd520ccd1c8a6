//! Core error types.

use thiserror::Error;

/// Catalog errors.
///
/// Lookups that miss are not errors; they return `None`. This enum only
/// covers conditions a caller has to react to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A category name did not match any known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A bookmark was resumed after the catalog was mutated.
    #[error("stale bookmark: taken at generation {taken_at}, catalog is at {current}")]
    StaleBookmark {
        /// Generation the bookmark was taken at.
        taken_at: u64,
        /// Generation of the catalog at resume time.
        current: u64,
    },
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
