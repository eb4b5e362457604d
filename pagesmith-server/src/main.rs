use std::sync::Arc;

use pagesmith_server::{config, db, state, store::ProjectStore, AppState};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagesmith_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    info!(port = config.port, "pagesmith server starting");

    if config.generation.api_key.is_none() {
        warn!("OPENROUTER_API_KEY not set; /api/ai-model will answer 503");
    }

    // Database
    let db = db::connect(&config.database_url).await?;

    let state = Arc::new(AppState {
        store: ProjectStore::new(db),
        generation: state::GenerationState::new(config.generation.clone())?,
    });

    // Dioxus WASM frontend, served from the dx build output directory.
    // Override with FRONTEND_DIST in prod.
    info!(path = %config.frontend_dist, "serving frontend assets from");
    let app = pagesmith_server::app(state, &config.frontend_dist);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
