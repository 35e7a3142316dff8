use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use campus_qa::bot::Responder;
use campus_qa::config::{self, Cli};
use campus_qa::intents::IntentTable;
use campus_qa::scrape;
use campus_qa::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // A broken intents file degrades to an empty table; the bot still runs.
    let intents = match IntentTable::load(&cli.intents_file) {
        Ok(table) => {
            info!(categories = table.len(), "intents loaded");
            table
        }
        Err(e) => {
            error!(error = %e, "intents unavailable, continuing without them");
            IntentTable::default()
        }
    };
    if intents.is_empty() {
        warn!("intent table is empty; every query goes straight to the ranker");
    }

    info!("scraping university pages, this can take a moment");
    let knowledge = scrape::build_knowledge_base(config::SCRAPE_URLS).await;

    let responder = Responder::new(intents, knowledge, cli.enable_ai);
    let app = server::router(AppState {
        responder: Arc::new(responder),
    });

    let addr: SocketAddr = cli.bind.parse()?;
    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
