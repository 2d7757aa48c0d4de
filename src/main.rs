use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use weather_records_api::app_state::build_app_state;
use weather_records_api::config::AppConfig;
use weather_records_api::core::persistence::records::weather_record_pg_repository::{
    build_pg_pool, PgWeatherRecordRepository,
};
use weather_records_api::logging::init_tracing;
use weather_records_api::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = init_tracing(config.log_dir.as_deref())?;
    info!(?config, "Configuration loaded");

    let pool = build_pg_pool(&config.database)?;
    let repo = PgWeatherRecordRepository::new(pool.clone(), &config.database);
    let state = build_app_state(Arc::new(repo), config.max_per_page);

    let app = app_router().with_state(state);

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped, database pool closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
