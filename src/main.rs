use std::sync::Arc;

use anyhow::Context;

use idea_drop_api::auth::TokenService;
use idea_drop_api::config;
use idea_drop_api::database::postgres::{PgIdeaStore, PgUserStore};
use idea_drop_api::database;
use idea_drop_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("starting IdeaDrop API in {:?} mode", config.environment);

    // Both checks are fatal startup conditions, not per-request errors
    let tokens = TokenService::new(&config.security.jwt_secret)
        .context("JWT_SECRET must be set before the server can start")?;
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = database::connect(&database_url, &config.database)
        .await
        .context("failed to connect to Postgres")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let state = AppState {
        tokens: Arc::new(tokens),
        users: Arc::new(PgUserStore::new(pool.clone())),
        ideas: Arc::new(PgIdeaStore::new(pool)),
    };

    let app = idea_drop_api::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("IdeaDrop API listening on http://{bind_addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
