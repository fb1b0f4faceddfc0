// ============================================================
// ANALYSIS PAYLOAD TYPES
// ============================================================
// Serializable summaries handed to the prompt composer.
// Built fresh per analysis call, never mutated afterwards.

use serde::Serialize;
use std::collections::BTreeMap;

use super::table::FileKind;

/// Summary of a reviews table. The histogram always carries the five
/// levels 1..=5; BTreeMap keeps serialization order-stable (1 -> 5).
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsPayload {
    /// Rows that survived the empty-review filter
    pub n_rows: usize,

    /// Rows with an extractable numeric rating
    pub n_with_rating: usize,

    /// Mean of the extracted ratings; None when no rating is present
    pub avg_rating: Option<f64>,

    /// Occurrence count per clamped rating level
    pub rating_distribution: BTreeMap<u8, usize>,

    /// Bounded random sample of review texts
    pub sample: Vec<String>,
}

/// Per-question summary within a survey payload.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSummary {
    pub question: String,
    pub n_answers: usize,
    pub sample_answers: Vec<String>,
}

/// Summary of a survey table. Questions appear in first-appearance order.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyPayload {
    /// Rows where both question and answer are non-empty after trimming
    pub n_rows: usize,

    pub n_questions: usize,
    pub questions: Vec<QuestionSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisPayload {
    Reviews(ReviewsPayload),
    Survey(SurveyPayload),
}

impl AnalysisPayload {
    pub fn kind(&self) -> FileKind {
        match self {
            AnalysisPayload::Reviews(_) => FileKind::Reviews,
            AnalysisPayload::Survey(_) => FileKind::Survey,
        }
    }
}
