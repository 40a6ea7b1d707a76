use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use restartup::errors::Report;
use restartup::log;
use restartup_devserver::config::DevServerConfig;
use restartup_devserver::{AppState, router, seed};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    restartup::log::setup()?;

    let config = DevServerConfig::from_env()?;
    let state = Arc::new(AppState::new());

    if config.seed {
        let game_id = seed::demo_game(&state.games).await?;
        log::info!(
            "Seeded demo game {} (moderator password {:?})",
            game_id,
            seed::DEMO_PASSWORD
        );
    }

    let listener = TcpListener::bind(config.addr).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
