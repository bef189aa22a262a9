mod chat;
mod config;
mod errors;
mod llm_client;
mod occupation;
mod recommendation;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::occupation::client::CareerOneStopClient;
use crate::routes::build_router;
use crate::session::store::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Navigator API v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.upstream_timeout_secs);

    // Occupation data source
    let occupations = CareerOneStopClient::new(
        config.career_api_base_url.clone(),
        config.career_user_id.clone(),
        config.career_api_token.clone(),
        timeout,
    )?;
    info!("Occupation client initialized ({})", config.career_api_base_url);

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone(), timeout)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Session store: Redis when configured
    let sessions: Arc<dyn SessionStore> = match &config.redis_url {
        Some(url) => {
            let redis = redis::Client::open(url.as_str())?;
            info!("Redis session store initialized (ttl {}s)", config.session_ttl_secs);
            Arc::new(RedisSessionStore::new(redis, config.session_ttl_secs))
        }
        None => {
            warn!("REDIS_URL not set; sessions are kept in memory only");
            Arc::new(MemorySessionStore::new(Duration::from_secs(
                config.session_ttl_secs,
            )))
        }
    };

    // Build app state
    let state = AppState {
        occupations: Arc::new(occupations),
        llm: Arc::new(llm),
        sessions,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
