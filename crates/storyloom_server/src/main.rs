use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use storyloom_error::{ConfigError, ServerError, ServerErrorKind};
use storyloom_narrative::{SimilarityScorer, StoryGenerator};
use storyloom_server::{ApiState, StoryloomConfig, create_router, init_tracing, serve};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Storyloom beat-to-prose story generator", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./storyloom.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Enable debug logging for Storyloom crates
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = StoryloomConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config = config.with_bind(bind);
    }

    init_tracing(cli.verbose, config.server().json_logs)?;

    let api_key = std::env::var("ANTHROPIC_KEY")
        .map_err(|_| ConfigError::missing_env("ANTHROPIC_KEY"))?;
    let embeddings_key = std::env::var("OPENAI_API_KEY").ok();

    let driver = storyloom_server::completion_driver(config.completion(), api_key);
    let scorer = SimilarityScorer::new(storyloom_server::embeddings(
        config.embeddings(),
        embeddings_key,
    ));
    let generator = StoryGenerator::new(driver, scorer)
        .with_context_limit(config.generation().context_char_limit);

    let app = create_router(ApiState::new(generator));

    let addr = config.server().bind.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.clone(),
            message: e.to_string(),
        })
    })?;

    info!(addr = %addr, "Storyloom listening");

    serve(listener, app, shutdown_signal()).await?;

    info!("Storyloom stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
