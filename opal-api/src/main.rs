use std::net::SocketAddr;
use std::sync::Arc;

use opal_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opal_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = opal_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Opal API on port {}", config.server.port);

    let db = opal_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");

    let state = AppState {
        products: Arc::new(opal_store::PgProductRepository::new(db.pool.clone())),
        history: Arc::new(opal_store::PgHistoryRepository::new(db.pool.clone())),
        optimizer: Arc::new(opal_engine::PriceOptimizer::new(config.engine.clone())),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
