use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{LLMConfig, LLMProvider};

/// Process-wide analyzer configuration: defaults, then an optional TOML
/// file, then `FEEDBACK_*` environment variables. Validated once at
/// startup and held immutably for the process's duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub provider: LLMProvider,
    pub base_url: String,
    pub model: String,
    pub review_sample_size: usize,
    pub per_question_sample: usize,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::OpenAI,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4.1".to_string(),
            review_sample_size: 80,
            per_question_sample: 50,
            max_tokens: Some(2048),
            temperature: Some(0.7),
        }
    }
}

impl AnalyzerConfig {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed("FEEDBACK_"))
            .extract()
            .map_err(|e| AppError::Parse(format!("Invalid configuration: {}", e)))
    }

    /// Resolve the provider credential from the environment. Fails before
    /// any file I/O when the key is absent.
    pub fn llm_config(&self) -> Result<LLMConfig> {
        let (env_var, label) = match self.provider {
            LLMProvider::OpenAI => ("OPENAI_API_KEY", "OpenAI"),
            LLMProvider::Gemini => ("GEMINI_API_KEY", "Gemini"),
        };
        let api_key = std::env::var(env_var).map_err(|_| {
            AppError::MissingCredential(format!("{} not set for {} provider", env_var, label))
        })?;

        Ok(LLMConfig {
            provider: self.provider.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: Some(api_key),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.review_sample_size, 80);
        assert_eq!(config.per_question_sample, 50);
        assert_eq!(config.provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AnalyzerConfig::load(None).unwrap();
        assert_eq!(config.model, AnalyzerConfig::default().model);
    }
}
