// ============================================================
// CSV PARSER
// ============================================================
// Parse delimited files into a RecordTable with normalized headers

use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::table::{normalize_column, RecordRow, RecordTable};

/// Delimited-text parser. Comma is the documented default separator;
/// auto-detection keeps historical semicolon exports loading.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a file into a table.
    pub fn parse_file(&self, path: &Path) -> Result<RecordTable> {
        let content = read_lossy(path)?;
        self.parse_content(&content)
    }

    /// Parse delimited content from a string.
    pub fn parse_content(&self, content: &str) -> Result<RecordTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::Parse(format!("Failed to read headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result
                .map_err(|e| AppError::Parse(format!("Failed to parse row {}: {}", index + 1, e)))?;
            rows.push(build_row(index, &headers, &record));
        }

        Ok(RecordTable::new(
            headers.iter().map(|name| name.to_string()).collect(),
            rows,
        ))
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe) by
    /// scoring per-line counts for consistency and frequency.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.chars().filter(|&c| c as u8 == delimiter).count())
                .collect();

            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());
            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    /// Parse a file with automatic delimiter detection.
    pub fn parse_file_auto_detect(path: &Path) -> Result<RecordTable> {
        let content = read_lossy(path)?;
        let delimiter = Self::detect_delimiter(&content);
        Self::default().with_delimiter(delimiter).parse_content(&content)
    }
}

fn build_row(index: usize, headers: &StringRecord, record: &StringRecord) -> RecordRow {
    let mut fields = HashMap::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let value = record.get(idx).unwrap_or("").to_string();
        fields.insert(normalize_column(header), value);
    }
    RecordRow::new(index, fields)
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::DataAccess(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(String::from_utf8_lossy(&bytes).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_content() {
        let content = "review,rate\nGreat product,5\nTerrible,1";
        let table = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.headers(), ["review", "rate"]);
        assert_eq!(table.rows()[0].get("review"), Some("Great product"));
        assert_eq!(table.rows()[1].get("rate"), Some("1"));
    }

    #[test]
    fn test_headers_normalized_on_parse() {
        let content = " Review , RATE \nGreat,5";
        let table = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(table.headers(), ["review", "rate"]);
        assert_eq!(table.rows()[0].get("review"), Some("Great"));
    }

    #[test]
    fn test_short_rows_fill_empty_values() {
        let content = "question,answer\nOnly a question";
        let table = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(table.rows()[0].get("question"), Some("Only a question"));
        assert_eq!(table.rows()[0].get("answer"), Some(""));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(CsvParser::detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(CsvParser::detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(CsvParser::detect_delimiter("a|b|c\nd|e|f"), b'|');
    }

    #[test]
    fn test_semicolon_content_parses_with_detection() {
        let content = "review;rate\nGreat;5";
        let delimiter = CsvParser::detect_delimiter(content);
        let table = CsvParser::new()
            .with_delimiter(delimiter)
            .parse_content(content)
            .unwrap();
        assert_eq!(table.rows()[0].get("rate"), Some("5"));
    }
}
