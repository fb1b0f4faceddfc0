use crate::domain::error::{AppError, Result};
use crate::domain::payload::AnalysisPayload;
use crate::domain::table::FileKind;

pub(crate) const SYSTEM_INSTRUCTION: &str =
    "You are a business analyst. Analyze the customer feedback summary you are given and respond with a clear, structured report.";

/// Render the fixed per-kind template around the payload. The payload is
/// embedded as pretty-printed JSON so the model sees exact figures.
pub fn compose_prompt(kind: FileKind, payload: &AnalysisPayload) -> Result<String> {
    let data = serde_json::to_string_pretty(payload)
        .map_err(|e| AppError::Parse(format!("Failed to serialize payload: {}", e)))?;

    let mut body = String::new();
    match kind {
        FileKind::Survey => {
            body.push_str("Analyze the survey responses summarized below.\n\n");
            body.push_str("Data in JSON format:\n");
            body.push_str(&data);
            body.push_str("\n\nPerform the following analysis:\n");
            body.push_str("1. Identify the main themes and patterns in the answers\n");
            body.push_str("2. Group similar answers together\n");
            body.push_str("3. Draw the key conclusions for each question\n");
            body.push_str("4. Present recommendations based on the answers\n");
            body.push_str("\nPresent the response in a well-organized form.");
        }
        FileKind::Reviews => {
            body.push_str("Analyze the user reviews summarized below.\n\n");
            body.push_str("Data in JSON format:\n");
            body.push_str(&data);
            body.push_str("\n\nPerform the following analysis:\n");
            body.push_str("1. Sentiment analysis (positive/negative/neutral)\n");
            body.push_str("2. Most frequently reported problems\n");
            body.push_str("3. Most frequently mentioned praise\n");
            body.push_str("4. Rating statistics (distribution of ratings 1-5)\n");
            body.push_str("5. Key conclusions and recommendations\n");
            body.push_str("\nPresent the response in a well-organized form.");
        }
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::{QuestionSummary, ReviewsPayload, SurveyPayload};
    use std::collections::BTreeMap;

    fn reviews_payload() -> AnalysisPayload {
        AnalysisPayload::Reviews(ReviewsPayload {
            n_rows: 2,
            n_with_rating: 2,
            avg_rating: Some(3.0),
            rating_distribution: (1..=5).map(|l| (l, usize::from(l == 1 || l == 5))).collect::<BTreeMap<_, _>>(),
            sample: vec!["Great!".to_string(), "Bad".to_string()],
        })
    }

    #[test]
    fn test_reviews_prompt_embeds_exact_figures() {
        let prompt = compose_prompt(FileKind::Reviews, &reviews_payload()).unwrap();
        assert!(prompt.contains("user reviews"));
        assert!(prompt.contains("\"n_rows\": 2"));
        assert!(prompt.contains("\"avg_rating\": 3.0"));
        assert!(prompt.contains("Sentiment analysis"));
    }

    #[test]
    fn test_survey_prompt_sections() {
        let payload = AnalysisPayload::Survey(SurveyPayload {
            n_rows: 1,
            n_questions: 1,
            questions: vec![QuestionSummary {
                question: "How satisfied?".to_string(),
                n_answers: 1,
                sample_answers: vec!["Very".to_string()],
            }],
        });
        let prompt = compose_prompt(FileKind::Survey, &payload).unwrap();
        assert!(prompt.contains("survey responses"));
        assert!(prompt.contains("How satisfied?"));
        assert!(prompt.contains("main themes"));
        assert!(!prompt.contains("Sentiment analysis"));
    }

    #[test]
    fn test_prompt_is_reproducible_for_identical_payloads() {
        let first = compose_prompt(FileKind::Reviews, &reviews_payload()).unwrap();
        let second = compose_prompt(FileKind::Reviews, &reviews_payload()).unwrap();
        assert_eq!(first, second);
    }
}
