//! `fxcoach` — AI forex day-trading coach agent.
//!
//! Startup: load credentials from the environment, connect to the broker,
//! register the coaching handler once, then answer invocations until the
//! operator interrupts the process.
//!
//! Exit codes: 0 after an operator interrupt; 1 when credentials are
//! missing, session setup fails, or the broker connection is lost.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use fxcoach_agent::CoachingHandler;
use fxcoach_core::handler::RequestHandler;
use fxcoach_core::provider::Provider;
use fxcoach_providers::OpenAiCompatProvider;
use fxcoach_session::{BrokerConfig, SessionClient};

mod config;

use config::AgentConfig;

#[derive(Parser)]
#[command(
    name = "fxcoach",
    about = "fxcoach — AI Forex Day Trading Coach agent",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the model (default: FXCOACH_MODEL or gpt-4)
    #[arg(long)]
    model: Option<String>,

    /// Override the broker URL (default: FXCOACH_BROKER_URL)
    #[arg(long)]
    broker_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fxcoach: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AgentConfig::from_env().map_err(|e| {
        format!("{e}\n\nSet OPENAI_API_KEY and AGENT_JWT before starting the agent.")
    })?;

    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(url) = cli.broker_url {
        config.broker_url = url;
    }

    let provider: Arc<dyn Provider> = Arc::new(OpenAiCompatProvider::new(
        config.provider_name(),
        &config.provider_url,
        &config.openai_api_key,
    ));
    let handler = CoachingHandler::new(provider, &config.model);

    let broker = BrokerConfig {
        url: config.broker_url.clone(),
        auth_token: config.agent_jwt.clone(),
    };
    let mut session = SessionClient::connect(&broker).await?;
    session.register(&handler.manifest()).await?;

    info!(model = %config.model, broker = %config.broker_url, "Coach agent ready");

    tokio::select! {
        result = session.run(&handler) => {
            result?;
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted by operator, shutting down");
            Ok(())
        }
    }
}
