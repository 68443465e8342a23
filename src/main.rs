use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hybreed::ai::GeminiClient;
use hybreed::config::Config;
use hybreed::handlers::{ai, catalog, collections, users};
use hybreed::repositories::{CatalogRepository, CollectionRepository, UserRepository};
use hybreed::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hybreed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database: {}", config.database_url);
    let pool = db::create_pool(&config.database_url)?;

    migrations::run_migrations(&pool)?;

    let users_state = users::UsersState {
        user_repo: UserRepository::new(pool.clone()),
    };
    let collections_state = collections::CollectionsState {
        collection_repo: CollectionRepository::new(pool.clone()),
    };
    let catalog_state = catalog::CatalogState {
        catalog_repo: CatalogRepository::new(pool.clone()),
        user_repo: UserRepository::new(pool.clone()),
    };
    let ai_state = ai::AiState {
        generator: Arc::new(GeminiClient::new(config.gemini.clone())),
    };

    let app = routes::create_router(users_state, collections_state, catalog_state, ai_state);

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
