use async_trait::async_trait;
use pingora::server::{ShutdownSignal, ShutdownSignalWatch};
use tokio::signal::unix::{SignalKind, signal};

pub const INTERRUPT_NOTICE: &str = "\n!! Keyboard interrupt received, exiting !!";

/// Exit cleanly (status 0) on Ctrl-C instead of letting the signal kill us.
///
/// This is the only SIGINT path: the server runs with [`TerminateSignalWatch`],
/// which never subscribes to SIGINT.
pub fn install_interrupt_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        println!("{INTERRUPT_NOTICE}");
        tracing::info!("interrupt received, exiting");
        std::process::exit(0);
    })?;

    Ok(())
}

/// Shutdown watcher for Pingora that only reacts to SIGTERM and SIGQUIT.
///
/// Both start a graceful shutdown. There are no upgrade sockets to hand over.
pub struct TerminateSignalWatch;

#[async_trait]
impl ShutdownSignalWatch for TerminateSignalWatch {
    async fn recv(&self) -> ShutdownSignal {
        let (mut terminate, mut quit) =
            match (signal(SignalKind::terminate()), signal(SignalKind::quit())) {
                (Ok(terminate), Ok(quit)) => (terminate, quit),
                (Err(err), _) | (_, Err(err)) => {
                    tracing::error!(error = %err, "failed to register shutdown signals");
                    return std::future::pending().await;
                }
            };

        tokio::select! {
            _ = terminate.recv() => tracing::info!("SIGTERM received, shutting down"),
            _ = quit.recv() => tracing::info!("SIGQUIT received, shutting down"),
        }

        ShutdownSignal::GracefulTerminate
    }
}
