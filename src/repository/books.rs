//! In-memory book storage

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::models::{Book, BookRequest};

/// How new book ids are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Counter kept alongside the collection, ids are never reused
    #[default]
    Monotonic,
    /// `record count + 1`; an id can come back after a deletion
    Count,
}

/// Records the store starts with
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "1984", "George Orwell"),
        Book::new(2, "To Kill a Mockingbird", "Harper Lee"),
        Book::new(3, "The Great Gatsby", "F. Scott Fitzgerald"),
    ]
}

/// Owner of the book collection.
///
/// No internal locking: callers sharing a store across tasks go through
/// [`BooksRepository`], which serialises every operation.
#[derive(Debug, Clone)]
pub struct BookStore {
    books: Vec<Book>,
    next_id: i32,
    strategy: IdStrategy,
}

impl BookStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_books(Vec::new(), strategy)
    }

    /// Store holding the three seed records
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::with_books(seed_books(), strategy)
    }

    pub fn with_books(books: Vec<Book>, strategy: IdStrategy) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            books,
            next_id,
            strategy,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn get(&self, id: i32) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    /// Append a new record built from `request`. No validation happens here.
    pub fn create(&mut self, request: BookRequest) -> Book {
        let id = match self.strategy {
            IdStrategy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
            IdStrategy::Count => self.books.len() as i32 + 1,
        };
        let book = Book {
            id,
            title: request.title,
            author: request.author,
        };
        self.books.push(book.clone());
        book
    }

    /// Overwrite title and author of the record with `book.id`.
    /// Returns false when no such record exists; the store is left untouched.
    pub fn update(&mut self, book: Book) -> bool {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => {
                existing.title = book.title;
                existing.author = book.author;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns false when it did not exist.
    pub fn delete(&mut self, id: i32) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::seeded(IdStrategy::default())
    }
}

/// Shared handle to the process' book store
#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<RwLock<BookStore>>,
}

impl BooksRepository {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.store.read().await.list()
    }

    pub async fn get(&self, id: i32) -> Option<Book> {
        self.store.read().await.get(id)
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn create(&self, request: BookRequest) -> Book {
        self.store.write().await.create(request)
    }

    pub async fn update(&self, book: Book) -> bool {
        self.store.write().await.update(book)
    }

    pub async fn delete(&self, id: i32) -> bool {
        self.store.write().await.delete(id)
    }
}
