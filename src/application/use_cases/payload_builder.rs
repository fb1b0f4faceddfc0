// ============================================================
// PAYLOAD BUILDERS
// ============================================================
// Combine detector, normalizer, and sampler output into the
// summary structures embedded in prompts.

use indexmap::IndexMap;
use rand::Rng;

use crate::application::use_cases::rating::{extract_rating, summarize_ratings};
use crate::application::use_cases::sampler::sample_up_to;
use crate::domain::error::Result;
use crate::domain::payload::{QuestionSummary, ReviewsPayload, SurveyPayload};
use crate::domain::table::RecordTable;

/// Build the reviews summary. Rows whose review text is empty after
/// trimming are dropped before any rating statistics, so the histogram,
/// averages, and sample all cover the same filtered set.
pub fn build_reviews_payload<R: Rng + ?Sized>(
    table: &RecordTable,
    sample_size: usize,
    rng: &mut R,
) -> Result<ReviewsPayload> {
    let mut reviews = Vec::new();
    let mut ratings = Vec::new();

    for row in table.rows() {
        let review = row.require("review")?.trim();
        let rate = row.require("rate")?;
        if review.is_empty() {
            continue;
        }
        reviews.push(review.to_string());
        ratings.push(extract_rating(rate));
    }

    let stats = summarize_ratings(&ratings);
    let sample = sample_up_to(&reviews, sample_size, rng);

    Ok(ReviewsPayload {
        n_rows: stats.n_rows,
        n_with_rating: stats.n_with_rating,
        avg_rating: stats.avg_rating,
        rating_distribution: stats.distribution,
        sample,
    })
}

/// Build the survey summary. Rows where either field is empty after
/// trimming are dropped; the remaining rows group by exact trimmed
/// question text, in first-appearance order.
pub fn build_survey_payload<R: Rng + ?Sized>(
    table: &RecordTable,
    per_question_sample: usize,
    rng: &mut R,
) -> Result<SurveyPayload> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for row in table.rows() {
        let question = row.require("question")?.trim();
        let answer = row.require("answer")?.trim();
        if question.is_empty() || answer.is_empty() {
            continue;
        }
        groups
            .entry(question.to_string())
            .or_default()
            .push(answer.to_string());
    }

    let n_rows = groups.values().map(Vec::len).sum();
    let mut questions = Vec::with_capacity(groups.len());
    for (question, answers) in &groups {
        questions.push(QuestionSummary {
            question: question.clone(),
            n_answers: answers.len(),
            sample_answers: sample_up_to(answers, per_question_sample, rng),
        });
    }

    Ok(SurveyPayload {
        n_rows,
        n_questions: questions.len(),
        questions,
    })
}
