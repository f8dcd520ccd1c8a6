//! Bidirectional cursor over a catalog.
//!
//! A cursor is nothing more than a signed position into the catalog's live
//! book list. The position is kept in `[-1, len]`:
//!
//! ```text
//!   -1        0   1   2  ...  len-1     len
//!   BeforeStart  |------ Valid ------|   Done
//! ```
//!
//! Every operation is total. Out-of-range positions read as `None` and
//! stepping past either end saturates instead of drifting.

use super::book::Book;
use super::catalog::Catalog;
use tracing::trace;

/// Position of a cursor relative to the catalog bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Stepped backward past the first book.
    BeforeStart,
    /// Pointing at the book with this index.
    Valid(usize),
    /// Stepped forward past the last book, or the catalog is empty.
    Done,
}

/// A traversal handle bound to one catalog.
///
/// The cursor borrows the catalog, so the catalog cannot change underneath
/// it. Use [`Cursor::bookmark`] and [`Catalog::resume`] to keep a position
/// across mutations.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    catalog: &'a Catalog,
    position: isize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self::at(catalog, 0)
    }

    /// Create a cursor at `position`, clamped into `[-1, len]`.
    pub(crate) fn at(catalog: &'a Catalog, position: isize) -> Self {
        let mut cursor = Self {
            catalog,
            position: 0,
        };
        cursor.position = position.clamp(-1, cursor.len());
        cursor
    }

    /// Reset to the first book and return it.
    pub fn first(&mut self) -> Option<&'a Book> {
        self.position = 0;
        trace!(position = self.position, "cursor reset");
        self.current_item()
    }

    /// Step forward and return the book now under the cursor.
    ///
    /// Returns `None` once the cursor reaches the done state. Further calls
    /// keep the cursor there.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a Book> {
        self.position = (self.position + 1).min(self.len());
        trace!(position = self.position, "cursor next");
        self.current_item()
    }

    /// Step backward and return the book now under the cursor.
    ///
    /// From the done state this lands on the last book. Stepping before the
    /// first book returns `None` and keeps the cursor at `-1`.
    pub fn previous(&mut self) -> Option<&'a Book> {
        self.position = (self.position - 1).max(-1);
        trace!(position = self.position, "cursor previous");
        self.current_item()
    }

    /// True unless the cursor points at a book.
    pub fn is_done(&self) -> bool {
        self.position < 0 || self.position >= self.len()
    }

    /// The book under the cursor, without moving.
    pub fn current_item(&self) -> Option<&'a Book> {
        usize::try_from(self.position)
            .ok()
            .and_then(|index| self.catalog.books().get(index))
    }

    /// Raw position, in `[-1, len]`.
    pub fn position(&self) -> isize {
        self.position
    }

    /// Classify the current position.
    pub fn state(&self) -> CursorState {
        match usize::try_from(self.position) {
            Err(_) => CursorState::BeforeStart,
            Ok(index) if index < self.catalog.len() => CursorState::Valid(index),
            Ok(_) => CursorState::Done,
        }
    }

    /// Detach the current position from the catalog borrow.
    pub fn bookmark(&self) -> Bookmark {
        Bookmark {
            position: self.position,
            generation: self.catalog.generation(),
        }
    }

    fn len(&self) -> isize {
        // Vec lengths never exceed isize::MAX.
        self.catalog.len() as isize
    }
}

/// A cursor position that does not borrow the catalog.
///
/// Bookmarks remember the catalog generation they were taken at, so
/// [`Catalog::resume`] can refuse them once the catalog has changed, or on
/// any other catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bookmark {
    position: isize,
    generation: u64,
}

impl Bookmark {
    /// Position the cursor was at.
    pub fn position(&self) -> isize {
        self.position
    }

    /// Catalog generation the bookmark was taken at.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn abc() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("A", "Author A", "1", Category::Fiction));
        catalog.add(Book::new("B", "Author B", "2", Category::Mystery));
        catalog.add(Book::new("C", "Author C", "3", Category::Mystery));
        catalog
    }

    fn title(book: Option<&Book>) -> Option<&str> {
        book.map(|b| b.title.as_str())
    }

    #[test]
    fn test_new_cursor_starts_at_zero() {
        let catalog = abc();
        let cursor = catalog.cursor();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.state(), CursorState::Valid(0));
        assert_eq!(title(cursor.current_item()), Some("A"));
    }

    #[test]
    fn test_forward_then_back() {
        let catalog = abc();
        let mut cursor = catalog.cursor();

        assert_eq!(title(cursor.first()), Some("A"));
        assert_eq!(title(cursor.next()), Some("B"));
        assert_eq!(title(cursor.next()), Some("C"));
        assert_eq!(cursor.next(), None);
        assert!(cursor.is_done());
        assert_eq!(cursor.state(), CursorState::Done);
        assert_eq!(title(cursor.previous()), Some("C"));
        assert!(!cursor.is_done());
    }

    #[test]
    fn test_empty_catalog_is_done_immediately() {
        let catalog = Catalog::new();
        let mut cursor = catalog.cursor();

        assert!(cursor.is_done());
        assert_eq!(cursor.state(), CursorState::Done);
        assert_eq!(cursor.first(), None);
        assert!(cursor.is_done());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.state(), CursorState::BeforeStart);
    }

    #[test]
    fn test_before_start_saturates() {
        let catalog = abc();
        let mut cursor = catalog.cursor();

        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.state(), CursorState::BeforeStart);
        for _ in 0..10 {
            assert_eq!(cursor.previous(), None);
        }
        assert_eq!(cursor.position(), -1);
        assert!(cursor.is_done());
        assert_eq!(cursor.current_item(), None);

        // One step forward re-enters at the first book.
        assert_eq!(title(cursor.next()), Some("A"));
    }

    #[test]
    fn test_done_saturates() {
        let catalog = abc();
        let mut cursor = catalog.cursor();

        for _ in 0..10 {
            cursor.next();
        }
        assert_eq!(cursor.position(), 3);
        assert_eq!(title(cursor.previous()), Some("C"));
    }

    #[test]
    fn test_is_done_iff_no_current_item() {
        let catalog = abc();
        let mut cursor = catalog.cursor();

        for step in 0..40 {
            match (step * 7 + step / 3) % 3 {
                0 => cursor.next(),
                1 => cursor.previous(),
                _ => cursor.first(),
            };
            assert_eq!(cursor.is_done(), cursor.current_item().is_none());
        }
    }

    #[test]
    fn test_cursors_are_independent() {
        let catalog = abc();
        let mut one = catalog.cursor();
        let mut two = catalog.cursor();

        one.next();
        one.next();
        assert_eq!(title(one.current_item()), Some("C"));
        assert_eq!(title(two.current_item()), Some("A"));
        two.previous();
        assert_eq!(two.state(), CursorState::BeforeStart);
        assert_eq!(one.state(), CursorState::Valid(2));
    }

    #[test]
    fn test_bookmark_records_position_and_generation() {
        let catalog = abc();
        let mut cursor = catalog.cursor();
        cursor.next();

        let bookmark = cursor.bookmark();
        assert_eq!(bookmark.position(), 1);
        assert_eq!(bookmark.generation(), catalog.generation());
    }
}
