use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Cancel `token` on the first SIGINT/SIGTERM (Ctrl-C elsewhere).
pub fn cancel_on_signal(token: CancellationToken) {
    tokio::spawn(async move {
        select! {
            res = terminate_signal() => {
                if let Err(err) = res {
                    error!(%err, "Failed to listen for shutdown signal - triggering shutdown");
                }
                info!("shutdown triggered");
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    });
}

#[cfg(unix)]
async fn terminate_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut term = signal(SignalKind::terminate())?;
    select! {
        res = tokio::signal::ctrl_c() => res,
        _ = term.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn terminate_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
