use std::path::Path;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::application::use_cases::format_detector::detect_kind;
use crate::application::use_cases::payload_builder::{
    build_reviews_payload, build_survey_payload,
};
use crate::application::use_cases::prompt_composer::{compose_prompt, SYSTEM_INSTRUCTION};
use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use crate::domain::payload::AnalysisPayload;
use crate::domain::table::{FileKind, RecordTable};
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::llm_clients::LLMClient;

/// Single-shot analysis orchestrator: load -> detect -> build payload ->
/// compose prompt -> generate. Every failure propagates; there is no
/// retry and no fallback model.
pub struct AnalyzeUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    llm_config: LLMConfig,
    review_sample_size: usize,
    per_question_sample: usize,
}

impl AnalyzeUseCase {
    pub fn new(
        llm_client: Arc<dyn LLMClient + Send + Sync>,
        llm_config: LLMConfig,
        review_sample_size: usize,
        per_question_sample: usize,
    ) -> Self {
        Self {
            llm_client,
            llm_config,
            review_sample_size,
            per_question_sample,
        }
    }

    /// Analyze a delimited file on disk and return the report text.
    pub async fn execute(&self, input: &Path) -> Result<String> {
        info!(path = %input.display(), "Loading feedback file");
        let table = CsvParser::parse_file_auto_detect(input)?;
        self.analyze_table(&table).await
    }

    /// Analyze delimited content already in memory (for testing or
    /// in-memory data).
    pub async fn execute_content(&self, content: &str) -> Result<String> {
        let delimiter = CsvParser::detect_delimiter(content);
        let table = CsvParser::new().with_delimiter(delimiter).parse_content(content)?;
        self.analyze_table(&table).await
    }

    async fn analyze_table(&self, table: &RecordTable) -> Result<String> {
        let kind = detect_kind(table)?;
        info!(kind = kind.as_str(), rows = table.len(), "Detected file kind");

        let mut rng = StdRng::from_os_rng();
        let payload = self.build_payload(table, kind, &mut rng)?;
        let prompt = compose_prompt(kind, &payload)?;

        info!(model = %self.llm_config.model, "Requesting analysis");
        self.llm_client
            .generate(&self.llm_config, SYSTEM_INSTRUCTION, &prompt)
            .await
    }

    fn build_payload<R: Rng + ?Sized>(
        &self,
        table: &RecordTable,
        kind: FileKind,
        rng: &mut R,
    ) -> Result<AnalysisPayload> {
        match kind {
            FileKind::Reviews => {
                build_reviews_payload(table, self.review_sample_size, rng).map(AnalysisPayload::Reviews)
            }
            FileKind::Survey => {
                build_survey_payload(table, self.per_question_sample, rng).map(AnalysisPayload::Survey)
            }
        }
    }
}
