//! Demo configuration.

use crate::formatter::OutputFormat;
use bookshelf_core::{Category, Predicate};

/// Default title looked up by the demo.
pub const DEFAULT_SEARCH_TITLE: &str = "Book2";

/// Default category filter used by the demo.
pub const DEFAULT_FILTER_CATEGORY: Category = Category::Mystery;

/// What the demo prints and how.
#[derive(Debug, Clone)]
pub struct ShelfConfig {
    /// Output format.
    pub format: OutputFormat,

    /// Title to look up. None skips the search section.
    pub search_title: Option<String>,

    /// Filter applied in the filter section.
    pub filter: Predicate,

    /// Whether to walk the catalog backward after the forward walk.
    pub backward: bool,
}

impl ShelfConfig {
    /// Create a configuration with the demo defaults.
    pub fn new() -> Self {
        Self {
            format: OutputFormat::default(),
            search_title: Some(DEFAULT_SEARCH_TITLE.to_string()),
            filter: Predicate::category(DEFAULT_FILTER_CATEGORY),
            backward: true,
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the title to search for.
    pub fn with_search_title(mut self, title: impl Into<String>) -> Self {
        self.search_title = Some(title.into());
        self
    }

    /// Skip the search section.
    pub fn without_search(mut self) -> Self {
        self.search_title = None;
        self
    }

    /// Replace the filter.
    pub fn with_filter(mut self, filter: Predicate) -> Self {
        self.filter = filter;
        self
    }

    /// Enable or disable the backward walk.
    pub fn with_backward(mut self, backward: bool) -> Self {
        self.backward = backward;
        self
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShelfConfig::default();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.search_title.as_deref(), Some("Book2"));
        assert_eq!(config.filter, Predicate::category(Category::Mystery));
        assert!(config.backward);
    }

    #[test]
    fn test_builder() {
        let config = ShelfConfig::new()
            .with_format(OutputFormat::Csv)
            .without_search()
            .with_filter(Predicate::author("Author1"))
            .with_backward(false);

        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.search_title.is_none());
        assert_eq!(config.filter, Predicate::author("Author1"));
        assert!(!config.backward);
    }
}
