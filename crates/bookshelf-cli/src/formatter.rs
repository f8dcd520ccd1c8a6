//! Output formatters for books.

use bookshelf_core::Book;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    #[default]
    Table,
    /// One line per book
    Plain,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter {
    /// Format a single book, or a placeholder if there is none.
    fn format_book(&self, book: Option<&Book>) -> String;

    /// Format an ordered list of books.
    fn format_books(&self, books: &[&Book]) -> String;

    /// Format a section heading.
    fn format_heading(&self, heading: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

const HEADERS: [&str; 4] = ["title", "author", "isbn", "category"];

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_book(&self, book: Option<&Book>) -> String {
        match book {
            Some(book) => self.format_books(&[book]),
            None => "No results".to_string(),
        }
    }

    fn format_books(&self, books: &[&Book]) -> String {
        if books.is_empty() {
            return "No results".to_string();
        }

        let mut table = Table::new();
        table.set_header(HEADERS.iter().map(Cell::new).collect::<Vec<_>>());
        for book in books {
            table.add_row(vec![
                Cell::new(&book.title),
                Cell::new(&book.author),
                Cell::new(&book.isbn),
                Cell::new(book.category),
            ]);
        }

        format!("{}\n{} book(s)", table, books.len())
    }

    fn format_heading(&self, heading: &str) -> String {
        format!("\n{}", heading)
    }
}

/// Plain formatter: one `Display` line per book.
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format_book(&self, book: Option<&Book>) -> String {
        match book {
            Some(book) => book.to_string(),
            None => "(none)".to_string(),
        }
    }

    fn format_books(&self, books: &[&Book]) -> String {
        books
            .iter()
            .map(|book| book.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_heading(&self, heading: &str) -> String {
        format!("\n{}:", heading)
    }
}

/// CSV formatter.
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_book(&self, book: Option<&Book>) -> String {
        match book {
            Some(book) => self.format_books(&[book]),
            None => HEADERS.join(","),
        }
    }

    fn format_books(&self, books: &[&Book]) -> String {
        let mut output = HEADERS.join(",");
        for book in books {
            output.push('\n');
            output.push_str(&format!(
                "{},{},{},{}",
                escape_csv(&book.title),
                escape_csv(&book.author),
                escape_csv(&book.isbn),
                book.category
            ));
        }
        output
    }

    fn format_heading(&self, heading: &str) -> String {
        format!("# {}", heading)
    }
}

/// Quote a CSV field if it contains a delimiter, quote, or newline.
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
