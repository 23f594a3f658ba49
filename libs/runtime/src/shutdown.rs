use anyhow::Result;

/// Resolve once the process receives a termination request.
///
/// Unix: SIGTERM or SIGINT. Windows: Ctrl+C / Ctrl+Break.
pub async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => tracing::info!("shutdown: SIGTERM received"),
            _ = sigint.recv() => tracing::info!("shutdown: SIGINT received"),
        }
        Ok(())
    }

    #[cfg(windows)]
    {
        use tokio::signal::windows::{ctrl_break, ctrl_c};
        let mut c = ctrl_c()?;
        let mut br = ctrl_break()?;
        tokio::select! {
            _ = c.recv() => tracing::info!("shutdown: Ctrl+C received"),
            _ = br.recv() => tracing::info!("shutdown: Ctrl+Break received"),
        }
        Ok(())
    }
}
