use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use feedback_analyzer::application::AnalyzeUseCase;
use feedback_analyzer::domain::error::Result;
use feedback_analyzer::infrastructure::config::AnalyzerConfig;
use feedback_analyzer::infrastructure::llm_clients::{LLMClient, RouterClient};

/// Analyze survey or review CSV exports with an LLM and write a report.
#[derive(Parser)]
#[command(name = "feedback-analyzer", version, about)]
struct Cli {
    /// Input file with survey (question/answer) or review (review/rate) records
    input: PathBuf,

    /// Where to write the generated report
    #[arg(short, long, default_value = "report.md")]
    output: PathBuf,

    /// Override the configured model
    #[arg(short, long)]
    model: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        error!(error = %err, "Analysis failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AnalyzerConfig::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    // Credential check happens before any file I/O.
    let llm_config = config.llm_config()?;

    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(RouterClient::new());
    let analyzer = AnalyzeUseCase::new(
        llm_client,
        llm_config,
        config.review_sample_size,
        config.per_question_sample,
    );

    let report = analyzer.execute(&cli.input).await?;
    std::fs::write(&cli.output, &report)?;
    info!(path = %cli.output.display(), "Report written");
    Ok(())
}
