use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("unsupported browser '{browser}' or operating system '{os}'")]
    UnsupportedBrowser { browser: String, os: String },
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

impl HistoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, HistoryError::SourceNotFound(_))
    }
}
