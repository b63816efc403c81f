//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::{repository::Repository, validation::BookValidator};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository and validation rules
    pub fn new(repository: Repository, validator: Arc<dyn BookValidator>) -> Self {
        Self {
            books: books::BooksService::new(repository, validator),
        }
    }
}
