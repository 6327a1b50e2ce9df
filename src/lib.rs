pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use config::{AppConfig, EnrichmentStrategy};
pub use db::{create_pool, InMemorySource, PgRecordSource, RecordSource};
pub use error::{RecordError, Result};
pub use service::RecordFilterService;
