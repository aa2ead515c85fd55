use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read {file}: {source}")]
    Read { file: PathBuf, source: std::io::Error },
}

#[derive(Debug, Error)]
pub enum IncludeGraphError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(String),
}
