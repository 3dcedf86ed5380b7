use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use musicdb_api::config::ServerConfig;
use musicdb_api::router::build_app_router;
use musicdb_api::state::AppState;
use musicdb_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "musicdb_api=debug,musicdb_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let addr = config.bind_addr().expect("HOST must be an IP address");
    let pool = prepare_database(&config).await;

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "musicdb listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Database pool closed, exiting");
}

/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, confirm the database answers, and bring the schema up to date.
/// Any failure here aborts startup.
async fn prepare_database(config: &ServerConfig) -> DbPool {
    let pool = musicdb_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    musicdb_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    musicdb_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let schema_version = musicdb_db::schema_version(&pool)
        .await
        .expect("Failed to read schema version");
    tracing::info!(
        max_connections = config.db_max_connections,
        schema_version,
        "Database ready"
    );
    pool
}

/// Resolve on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down, draining in-flight requests");
}
