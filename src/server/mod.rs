mod error;
mod routes;

use std::path::Path;

pub use error::ApiError;
pub use routes::{AppState, GenerateParams, generate_menu, health, router};

use crate::error::Result;

/// Bind and serve until Ctrl+C.
pub async fn serve(state: AppState, host: &str, port: u16, static_dir: &Path) -> Result<()> {
    tracing::info!(
        menu = %state.menu_path.display(),
        static_dir = %static_dir.display(),
        "Starting menu server..."
    );

    let app = router(state, static_dir);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
