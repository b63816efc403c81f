//! Bookshelf
//!
//! A small REST JSON API over an in-memory catalog of books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{BookStore, Repository};
use services::Services;
use validation::BookRequestValidator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the store, repository and services described by `config`
    pub fn from_config(config: AppConfig) -> Self {
        let store = if config.store.seed {
            BookStore::seeded(config.store.id_strategy)
        } else {
            BookStore::new(config.store.id_strategy)
        };
        let services = Services::new(Repository::new(store), Arc::new(BookRequestValidator));

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
