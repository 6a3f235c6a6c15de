use anyhow::Result;
use clinic_records_core::Config;
use clinic_records_server::{logging, server, AppState};
use tokio::net::TcpListener;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    logging::init(&config.log_filter)?;

    server::initialize_database(&config.database_path).map_err(|e| {
        error!(
            event = "database_init_failed",
            path = %config.database_path.display(),
            error = %e,
            "Failed to initialize database"
        );
        e
    })?;

    let listener = TcpListener::bind(config.bind_addr).await.map_err(|e| {
        error!(addr = %config.bind_addr, error = %e, "Failed to bind listener");
        e
    })?;

    server::serve(
        listener,
        AppState::new(config.database_path.clone()),
        shutdown_signal(),
    )
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
