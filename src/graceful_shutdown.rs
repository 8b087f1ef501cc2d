use tokio::signal;
use tracing::warn;

/// Resolves once the process is asked to stop: Ctrl+C anywhere, or
/// SIGTERM on unix. The server future is raced against this in `main`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        warn!("Ctrl+C received, initiating shutdown...");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        signal(SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
        warn!("SIGTERM received, initiating shutdown...");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
