//! Bookshelf
//!
//! A REST JSON API managing authors and books held in memory, with search,
//! filtering, sorting, pagination and catalog statistics.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{Repository, Store};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state over a fresh store, seeded when the config asks for it
    pub fn new(config: AppConfig) -> Self {
        let store = if config.store.seed {
            Store::seeded()
        } else {
            Store::new()
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: AppConfig, store: Store) -> Self {
        let repository = Repository::new(store);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
