//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookRequest},
    repository::Repository,
    validation::BookValidator,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    validator: Arc<dyn BookValidator>,
}

impl BooksService {
    pub fn new(repository: Repository, validator: Arc<dyn BookValidator>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository
            .books
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Validate then store a new book
    pub async fn create(&self, request: BookRequest) -> AppResult<Book> {
        self.validator
            .validate(&request)
            .map_err(AppError::Validation)?;

        let book = self.repository.books.create(request).await;
        tracing::info!(id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Apply `book` to the record with the same id. A missing record is not an error.
    pub async fn update(&self, book: Book) {
        let id = book.id;
        if self.repository.books.update(book).await {
            tracing::info!(id, "Book updated");
        } else {
            tracing::debug!(id, "Update ignored, no such book");
        }
    }

    /// Remove a book. A missing record is not an error.
    pub async fn delete(&self, id: i32) {
        if self.repository.books.delete(id).await {
            tracing::info!(id, "Book deleted");
        } else {
            tracing::debug!(id, "Delete ignored, no such book");
        }
    }
}
