//! Book catalog, predicates, and cursors.
//!
//! The catalog owns its books. Cursors borrow the catalog and only hold a
//! position, so every read sees the catalog's current contents.

mod book;
mod catalog;
mod cursor;
mod predicate;

pub use book::{Book, Category};
pub use catalog::Catalog;
pub use cursor::{Bookmark, Cursor, CursorState};
pub use predicate::{BookFilter, Predicate};
