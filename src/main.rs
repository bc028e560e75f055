use anyhow::Context;
use attrix_advisor::{Advisor, AdvisorConfig};
use attrix_api::{ApiState, RestApi};
use attrix_core::load_csv;
use attrix_similarity::AnalysisEngine;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Employee attrition analysis and retention recommendations
#[derive(Parser, Debug)]
#[command(name = "attrix")]
#[command(about = "Employee attrition analysis and retention recommendations", long_about = None)]
struct Args {
    /// Log level (overridden by RUST_LOG when set)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

/// Settings for the text-generation service
#[derive(clap::Args, Debug)]
struct GenerationArgs {
    /// API key for the text-generation service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the text-generation service
    #[arg(long, env = "ATTRIX_GENERATION_URL", default_value = attrix_advisor::DEFAULT_BASE_URL)]
    generation_url: String,

    /// Model to try, in order (repeatable); defaults to the built-in fallback list
    #[arg(long = "model")]
    models: Vec<String>,

    /// Request timeout for the generation service, in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

impl GenerationArgs {
    fn advisor(&self) -> anyhow::Result<Option<Advisor>> {
        let Some(api_key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };
        let mut config = AdvisorConfig::new(api_key)
            .with_base_url(self.generation_url.clone())
            .with_models(self.models.clone());
        config.timeout_secs = self.timeout_secs;
        Ok(Some(Advisor::from_config(&config)?))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REST API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 8080)]
        http_port: u16,

        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Analyze one employee of a CSV dataset and print the summary as JSON
    Analyze {
        /// Path to the CSV dataset
        #[arg(long)]
        csv: PathBuf,

        /// Row index of the employee to analyze
        #[arg(long, allow_negative_numbers = true)]
        index: i64,
    },

    /// Analyze one employee and print a generated retention recommendation
    Recommend {
        /// Path to the CSV dataset
        #[arg(long)]
        csv: PathBuf,

        /// Row index of the employee to analyze
        #[arg(long, allow_negative_numbers = true)]
        index: i64,

        #[command(flatten)]
        generation: GenerationArgs,
    },
}

fn parse_level(level: &str) -> Level {
    match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Directives from the environment win over the command-line level
fn log_filter(level: &str, env_directives: Option<String>) -> EnvFilter {
    match env_directives {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(LevelFilter::from_level(parse_level(level)).to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = log_filter(&args.log_level, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let engine = AnalysisEngine::default();

    match args.command {
        Command::Serve { http_port, generation } => serve(engine, http_port, &generation).await,
        Command::Analyze { csv, index } => {
            let summary = analyze(&engine, &csv, index)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Command::Recommend { csv, index, generation } => {
            let advisor = generation
                .advisor()?
                .context("an API key is required (use --api-key or GEMINI_API_KEY)")?;
            let summary = analyze(&engine, &csv, index)?;
            let recommendation = advisor.recommend(&summary, engine.config()).await?;
            info!("Recommendation generated by {}", recommendation.model);
            println!("{}", recommendation.text);
            Ok(())
        }
    }
}

fn analyze(
    engine: &AnalysisEngine,
    csv: &Path,
    index: i64,
) -> anyhow::Result<attrix_similarity::AnalysisSummary> {
    let dataset = load_csv(csv).with_context(|| format!("failed to load {}", csv.display()))?;
    info!("Loaded {} employee records from {:?}", dataset.len(), csv);
    let selection = dataset.select(index)?;
    Ok(engine.analyze(selection))
}

async fn serve(engine: AnalysisEngine, http_port: u16, generation: &GenerationArgs) -> anyhow::Result<()> {
    info!("Starting Attrix v{}", env!("CARGO_PKG_VERSION"));

    let advisor = generation.advisor()?.map(Arc::new);
    match &advisor {
        Some(a) => info!("Recommendations enabled (models: {})", a.models().join(", ")),
        None => warn!("No API key configured; /recommend will return 503"),
    }

    let state = Arc::new(ApiState::new(engine, advisor));

    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_log_filter_uses_cli_level() {
        let filter = log_filter("debug", None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter("warn", Some("  ".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_prefers_environment() {
        let filter = log_filter("debug", Some("error".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
