use tokio::signal;
use tracing::warn;

/// 阻塞直到收到退出信号（Ctrl+C，Unix 下还包括 SIGTERM）
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");
        tokio::select! {
            _ = signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");

    warn!("Shutdown signal received, initiating graceful shutdown...");
}
