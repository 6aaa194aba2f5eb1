//! Interrupt handling.

use log::warn;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` when the process receives Ctrl-C.
///
/// The evaluation loop checks the token between chunks, so an interrupt
/// stops the run after the current chunk and the partial report is kept.
pub fn spawn_interrupt_handler(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    warn!("Interrupt received, stopping after the current chunk");
                    cancel.cancel();
                }
            }
            _ = cancel.cancelled() => {}
        }
    })
}
