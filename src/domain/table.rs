// ============================================================
// RECORD TABLE TYPES
// ============================================================
// Ordered rows of string-keyed fields loaded from a delimited
// file. Immutable after load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::{AppError, Result};

/// The two supported input schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Survey,
    Reviews,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Survey => "survey",
            FileKind::Reviews => "reviews",
        }
    }
}

/// Normalize a column name: surrounding whitespace trimmed, lower-cased.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A single row, keyed by normalized column name.
#[derive(Debug, Clone)]
pub struct RecordRow {
    /// Row index (0-based)
    pub index: usize,

    fields: HashMap<String, String>,
}

impl RecordRow {
    pub fn new(index: usize, fields: HashMap<String, String>) -> Self {
        Self { index, fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Typed accessor for required columns. Fails explicitly instead of
    /// relying on implicit key lookup.
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| {
            AppError::MissingColumn(format!("row {} has no '{}' column", self.index, column))
        })
    }
}

/// An ordered sequence of rows with normalized headers.
#[derive(Debug, Clone)]
pub struct RecordTable {
    headers: Vec<String>,
    rows: Vec<RecordRow>,
}

impl RecordTable {
    pub fn new(headers: Vec<String>, rows: Vec<RecordRow>) -> Self {
        let headers = headers.iter().map(|name| normalize_column(name)).collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[RecordRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
