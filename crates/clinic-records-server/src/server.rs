//! Server lifecycle: schema setup, bind, serve until shutdown.

use std::future::Future;
use std::path::Path;

use tokio::net::TcpListener;
use tracing::info;

use clinic_records_core::db::{Database, DbResult};

use crate::api::{router, AppState};

/// Create the records table if absent. Must succeed before serving.
pub fn initialize_database(path: &Path) -> DbResult<()> {
    // The connection used for DDL is closed on return.
    Database::open(path)?;
    info!(
        event = "database_initialized",
        path = %path.display(),
        "Database initialized"
    );
    Ok(())
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(event = "server_started", %addr, "Clinic records server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!(event = "server_stopped", "Clinic records server stopped");
    Ok(())
}
