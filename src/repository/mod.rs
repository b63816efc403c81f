//! Repository layer for book storage

pub mod books;

pub use books::{BookStore, BooksRepository, IdStrategy};

/// Main repository struct holding the storage handles
#[derive(Clone)]
pub struct Repository {
    pub books: BooksRepository,
}

impl Repository {
    /// Create a new repository around the given store
    pub fn new(store: BookStore) -> Self {
        Self {
            books: BooksRepository::new(store),
        }
    }
}
