//! Book records and their categories.

use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Category tag attached to every book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// General fiction.
    #[default]
    Fiction,
    /// Mystery and crime.
    Mystery,
    /// Science fiction.
    ScienceFiction,
    /// Romance.
    Romance,
    /// Non-fiction.
    NonFiction,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Fiction,
        Category::Mystery,
        Category::ScienceFiction,
        Category::Romance,
        Category::NonFiction,
    ];

    /// Canonical name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::Mystery => "Mystery",
            Category::ScienceFiction => "ScienceFiction",
            Category::Romance => "Romance",
            Category::NonFiction => "NonFiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Parse a category name, ignoring case, `-`, `_` and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Category::ALL
            .into_iter()
            .find(|category| category.name().to_lowercase() == normalized)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A single catalog entry.
///
/// Books are plain values: the catalog stores them as given and never
/// rewrites their fields. Equality is structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Book {
    /// Title, matched case-insensitively by search.
    pub title: String,
    /// Author name.
    pub author: String,
    /// ISBN or other identifier.
    pub isbn: String,
    /// Category tag.
    pub category: Category,
}

impl Book {
    /// Create a new book.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            category,
        }
    }

    /// Check whether the title equals `title`, ignoring case.
    pub fn title_matches(&self, title: &str) -> bool {
        eq_ignore_case(&self.title, title)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}, Genre: {})",
            self.title, self.author, self.isbn, self.category
        )
    }
}

/// Case-insensitive string equality without allocating.
///
/// Folds each character with `char::to_lowercase` (full Unicode lowercase
/// mapping), not ordinal ASCII-only folding.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
