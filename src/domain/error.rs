use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    Format(String),
    MissingColumn(String),
    MissingCredential(String),
    DataAccess(String),
    Parse(String),
    Generation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Format(msg) => write!(f, "Format error: {}", msg),
            AppError::MissingColumn(msg) => write!(f, "Missing column: {}", msg),
            AppError::MissingCredential(msg) => write!(f, "Missing credential: {}", msg),
            AppError::DataAccess(msg) => write!(f, "Data access error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Generation(msg) => write!(f, "Generation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DataAccess(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
