use crate::domain::error::{AppError, Result};
use crate::domain::table::{normalize_column, FileKind, RecordTable};

/// Classify a loaded table by its column headers. Survey is checked before
/// Reviews, so a table carrying both header pairs classifies as Survey.
/// Runs once per table, before any row-level processing.
pub fn detect_kind(table: &RecordTable) -> Result<FileKind> {
    let headers: Vec<String> = table
        .headers()
        .iter()
        .map(|name| normalize_column(name))
        .collect();
    let has = |name: &str| headers.iter().any(|header| header == name);

    if has("question") && has("answer") {
        Ok(FileKind::Survey)
    } else if has("review") && has("rate") {
        Ok(FileKind::Reviews)
    } else {
        Err(AppError::Format(
            "unrecognized columns: expected question/answer (survey) or review/rate (reviews)"
                .to_string(),
        ))
    }
}
