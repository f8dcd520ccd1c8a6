//! Bookshelf Benchmark Suite
//!
//! Criterion benchmarks for catalog search, filtering, and cursor walks.

pub mod fixtures;

pub use fixtures::{generate_books, generate_catalog, Scale};
