//! The in-memory book catalog.

use super::book::{Book, Category};
use super::cursor::{Bookmark, Cursor};
use super::predicate::{BookFilter, Predicate};
use crate::error::{CatalogError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Source of generation stamps, shared by every catalog in the process.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Draw a stamp no other catalog state has carried.
fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// An ordered, in-memory collection of books.
///
/// Books are kept in insertion order. Duplicates are allowed.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Books in insertion order.
    books: Vec<Book>,
    /// Process-unique stamp, redrawn on every successful mutation.
    /// Clones share it until one of them changes.
    generation: u64,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            generation: next_generation(),
        }
    }

    /// Append a book.
    pub fn add(&mut self, book: Book) {
        debug!(title = %book.title, isbn = %book.isbn, "adding book");
        self.books.push(book);
        self.generation = next_generation();
    }

    /// Remove the first book equal to `book`.
    ///
    /// Returns the removed book, or `None` if no book matched. A miss leaves
    /// the catalog untouched.
    pub fn remove(&mut self, book: &Book) -> Option<Book> {
        let index = self.books.iter().position(|b| b == book)?;
        let removed = self.books.remove(index);
        self.generation = next_generation();
        debug!(title = %removed.title, index, "removed book");
        Some(removed)
    }

    /// Find the first book whose title equals `title`, ignoring case.
    ///
    /// Case is folded per character with Unicode lowercase mapping
    /// (`char::to_lowercase`), so e.g. the Kelvin sign (U+212A) matches `k`.
    /// Ties go to the earliest-added book.
    pub fn search(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title_matches(title))
    }

    /// Collect every book matching `filter`, in insertion order.
    pub fn filter_by<F>(&self, filter: &F) -> Vec<&Book>
    where
        F: BookFilter + ?Sized,
    {
        self.books.iter().filter(|b| filter.matches(b)).collect()
    }

    /// Collect every book in `category`, in insertion order.
    pub fn filter_by_category(&self, category: Category) -> Vec<&Book> {
        self.filter_by(&Predicate::category(category))
    }

    /// Create a cursor at the first position.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Rebind a bookmark to this catalog.
    ///
    /// Fails if the bookmark was taken from another catalog, or if this
    /// catalog was mutated after the bookmark was taken. An unmodified clone
    /// of the source catalog accepts it.
    pub fn resume(&self, bookmark: Bookmark) -> Result<Cursor<'_>> {
        if bookmark.generation() != self.generation {
            warn!(
                taken_at = bookmark.generation(),
                current = self.generation,
                "refusing stale bookmark"
            );
            return Err(CatalogError::StaleBookmark {
                taken_at: bookmark.generation(),
                current: self.generation,
            });
        }
        debug!(position = bookmark.position(), "resuming bookmark");
        Ok(Cursor::at(self, bookmark.position()))
    }

    /// Rebind a bookmark even if the catalog changed since.
    ///
    /// The position is reused as-is (clamped to the current bounds), so the
    /// cursor may now skip or repeat a book.
    pub fn resume_lenient(&self, bookmark: Bookmark) -> Cursor<'_> {
        if bookmark.generation() != self.generation {
            debug!(
                taken_at = bookmark.generation(),
                current = self.generation,
                "resuming bookmark across mutation"
            );
        }
        Cursor::at(self, bookmark.position())
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All books, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Iterate books in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Whether a book equal to `book` is present.
    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Current generation stamp. Unique across catalogs in the process and
    /// redrawn on every successful mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Book> for Catalog {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        for book in iter {
            self.add(book);
        }
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
