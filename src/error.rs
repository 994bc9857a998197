use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyFitError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Layout Validation Error: {0}")]
    Validation(String),

    #[error("Layout '{0}' is already registered")]
    DuplicateLayout(String),

    #[error("Unknown layout '{0}'")]
    UnknownLayout(String),
}

pub type KfResult<T> = Result<T, KeyFitError>;
