use thiserror::Error;

/// Failures that abort a filtering pass
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Database error: {0}")]
    Transport(#[from] sqlx::Error),

    #[error("Record source error: {0}")]
    Source(String),

    #[error("CSV export error: {0}")]
    Export(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, RecordError>;
