//! Book predicates used by `Catalog::filter_by`.
//!
//! Two shapes are accepted: any `Fn(&Book) -> bool` closure, and the
//! composable [`Predicate`] expression. Both go through [`BookFilter`], so the
//! catalog never needs to know which filters exist.

use super::book::{contains_ignore_case, eq_ignore_case, Book, Category};
use std::fmt;

/// A boolean test over a book.
pub trait BookFilter {
    /// Return `true` if `book` should be kept.
    fn matches(&self, book: &Book) -> bool;
}

impl<F> BookFilter for F
where
    F: Fn(&Book) -> bool,
{
    fn matches(&self, book: &Book) -> bool {
        self(book)
    }
}

/// Composable filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Predicate {
    /// Matches every book.
    #[default]
    Any,
    /// Category equals the given one.
    ByCategory(Category),
    /// Author equals the given name, ignoring case.
    ByAuthor(String),
    /// Title contains the given text, ignoring case.
    TitleContains(String),
    /// Both sides match.
    And(Box<Predicate>, Box<Predicate>),
    /// Either side matches.
    Or(Box<Predicate>, Box<Predicate>),
    /// Inner predicate does not match.
    Not(Box<Predicate>),
}

impl Predicate {
    /// Match books in `category`.
    pub fn category(category: Category) -> Self {
        Predicate::ByCategory(category)
    }

    /// Match books by `author`.
    pub fn author(author: impl Into<String>) -> Self {
        Predicate::ByAuthor(author.into())
    }

    /// Match books whose title contains `text`.
    pub fn title_contains(text: impl Into<String>) -> Self {
        Predicate::TitleContains(text.into())
    }

    /// Combine with `other` using logical AND.
    pub fn and(self, other: Predicate) -> Self {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Combine with `other` using logical OR.
    pub fn or(self, other: Predicate) -> Self {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    /// Negate this predicate.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// AND together all predicates, or `Any` if there are none.
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        predicates
            .into_iter()
            .reduce(Predicate::and)
            .unwrap_or(Predicate::Any)
    }
}

impl BookFilter for Predicate {
    fn matches(&self, book: &Book) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::ByCategory(category) => book.category == *category,
            Predicate::ByAuthor(author) => eq_ignore_case(&book.author, author),
            Predicate::TitleContains(text) => contains_ignore_case(&book.title, text),
            Predicate::And(left, right) => left.matches(book) && right.matches(book),
            Predicate::Or(left, right) => left.matches(book) || right.matches(book),
            Predicate::Not(inner) => !inner.matches(book),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Any => write!(f, "*"),
            Predicate::ByCategory(category) => write!(f, "category = {}", category),
            Predicate::ByAuthor(author) => write!(f, "author = {:?}", author),
            Predicate::TitleContains(text) => write!(f, "title ~ {:?}", text),
            Predicate::And(left, right) => write!(f, "({} AND {})", left, right),
            Predicate::Or(left, right) => write!(f, "({} OR {})", left, right),
            Predicate::Not(inner) => write!(f, "NOT {}", inner),
        }
    }
}
