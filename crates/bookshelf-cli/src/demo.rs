//! Sample catalog and the demo walk-through.

use crate::config::ShelfConfig;
use crate::formatter::Formatter;
use bookshelf_core::{Book, Catalog, Category, Result};
use tracing::info;

/// Build the sample catalog.
pub fn create_demo_catalog() -> Catalog {
    [
        ("Book1", "Author1", "111111", Category::Fiction),
        ("Book2", "Author2", "222222", Category::Romance),
        ("Book3", "Author3", "333333", Category::Mystery),
        ("Book4", "Author4", "444444", Category::ScienceFiction),
    ]
    .into_iter()
    .map(|(title, author, isbn, category)| Book::new(title, author, isbn, category))
    .collect()
}

/// Run every demo section against `catalog` and return the rendered output.
///
/// The forward walk leaves its cursor in the done state; the backward walk
/// resumes from a bookmark of that cursor.
pub fn run(catalog: &Catalog, config: &ShelfConfig, formatter: &dyn Formatter) -> Result<String> {
    let mut sections = Vec::new();

    if let Some(title) = &config.search_title {
        let found = catalog.search(title);
        info!(title = %title, found = found.is_some(), "searched catalog");
        sections.push(formatter.format_heading(&format!("Searched book \"{}\"", title)));
        sections.push(formatter.format_book(found));
    }

    let mut cursor = catalog.cursor();
    let mut forward = Vec::with_capacity(catalog.len());
    while !cursor.is_done() {
        forward.extend(cursor.current_item());
        cursor.next();
    }
    sections.push(formatter.format_heading("All books"));
    sections.push(formatter.format_books(&forward));
    let bookmark = cursor.bookmark();

    let filtered = catalog.filter_by(&config.filter);
    info!(filter = %config.filter, matched = filtered.len(), "filtered catalog");
    sections.push(formatter.format_heading(&format!("Books matching {}", config.filter)));
    sections.push(formatter.format_books(&filtered));

    if config.backward {
        let mut cursor = catalog.resume(bookmark)?;
        let mut backward = Vec::with_capacity(catalog.len());
        while let Some(book) = cursor.previous() {
            backward.push(book);
        }
        sections.push(formatter.format_heading("All books (backward)"));
        sections.push(formatter.format_books(&backward));
    }

    Ok(sections.join("\n"))
}
