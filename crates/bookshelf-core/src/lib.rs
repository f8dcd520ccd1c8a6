//! Bookshelf Core - in-memory book catalog with bidirectional cursors.
//!
//! This crate provides the catalog, its query operations, and the cursor
//! used to walk it in either direction.

pub mod catalog;
pub mod error;

pub use catalog::{Book, BookFilter, Bookmark, Catalog, Category, Cursor, CursorState, Predicate};
pub use error::{CatalogError, Result};
