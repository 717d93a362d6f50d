mod assist;
mod config;
mod errors;
mod extract;
mod llm_client;
mod metrics;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::{LlmTextGenerator, TextGenerator, UnconfiguredGenerator};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::fixtures::{self, FixtureSet};
use crate::store::AgencyStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentDesk API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config)?;

    let text_generator: Arc<dyn TextGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmTextGenerator(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; AI generation disabled");
            Arc::new(UnconfiguredGenerator)
        }
    };

    info!("Default time range: {}", config.default_time_range);

    let state = AppState::new(store, text_generator, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the in-memory store, seeded from `FIXTURES_PATH` or the built-in set.
fn build_store(config: &Config) -> Result<AgencyStore> {
    let mut store = AgencyStore::new();
    if !config.seed_fixtures {
        info!("Fixture seeding disabled; starting with an empty store");
        return Ok(store);
    }

    let fixture_set = match &config.fixtures_path {
        Some(path) => {
            info!("Loading fixtures from {}", path.display());
            FixtureSet::from_path(path)?
        }
        None => fixtures::builtin(),
    };
    fixture_set.load_into(&mut store)?;
    Ok(store)
}
