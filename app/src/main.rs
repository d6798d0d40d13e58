#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use staffq_config::Config;
use staffq_core::QueryDispatcher;
use staffq_directory::DirectoryStore;
use staffq_http::{ApiState, create_router};
use staffq_nlp::PatternRecognizer;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "staffq")]
#[command(about = "Natural-language queries over the employee directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Bind address, overriding the configured one
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            let config = Config::load()?;
            info!("Loaded config from ~/staffq/config.json");

            let store = DirectoryStore::connect(&config.database.url).await?;
            store.initialize().await?;

            // Collaborators are built once here and injected; nothing is
            // reachable through process-wide globals.
            let recognizer = PatternRecognizer::with_defaults()?;
            let dispatcher = QueryDispatcher::new(store, recognizer);
            let state = Arc::new(ApiState::new(dispatcher));
            let router = create_router(state, &config.server);

            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let listener = tokio::net::TcpListener::bind(&bind).await?;
            info!("Listening on http://{bind}");

            axum::serve(listener, router).await?;
        }
        Commands::Init => {
            Config::create_config()?;
        }
        Commands::Version => {
            println!("staffq {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
