//! Test data generation for benchmarks.
//!
//! Generators are seeded so runs are comparable.

use bookshelf_core::{Book, Catalog, Category};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scale factor for benchmark data generation.
#[derive(Clone, Copy, Debug, Default)]
pub enum Scale {
    /// 10 books.
    Tiny,
    /// 1,000 books.
    Small,
    /// 10,000 books.
    #[default]
    Medium,
    /// 100,000 books.
    Large,
}

impl Scale {
    /// Get the book count for this scale.
    pub fn count(&self) -> usize {
        match self {
            Scale::Tiny => 10,
            Scale::Small => 1_000,
            Scale::Medium => 10_000,
            Scale::Large => 100_000,
        }
    }
}

const AUTHORS: [&str; 8] = [
    "Austen", "Christie", "Herbert", "Le Guin", "Morrison", "Orwell", "Tolkien", "Woolf",
];

/// Generate a random string of specified length.
fn random_string(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

/// Generate `count` books with titles `Title <i> <noise>`.
pub fn generate_books(count: usize) -> Vec<Book> {
    const SEED: u64 = 12345;
    let mut rng = StdRng::seed_from_u64(SEED);

    (0..count)
        .map(|i| {
            let title = format!("Title {} {}", i, random_string(&mut rng, 12));
            let author = AUTHORS[rng.gen_range(0..AUTHORS.len())];
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            Book::new(title, author, format!("{:013}", i), category)
        })
        .collect()
}

/// Generate a catalog at the given scale.
pub fn generate_catalog(scale: Scale) -> Catalog {
    generate_books(scale.count()).into_iter().collect()
}
