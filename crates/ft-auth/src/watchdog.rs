use crate::SessionStore;

use std::time::Duration;

use log::{debug, warn};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Notification emitted when the watchdog reaps a lapsed session. The owner
/// reacts with a replace-style redirect to the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Expired,
}

/// Background task that periodically re-probes the stored expiry marker and
/// force-clears the session when it lapses.
///
/// Best-effort client-side housekeeping, not a security boundary: a forged
/// or revoked-but-unexpired token is not caught here.
pub struct ExpiryWatchdog {
    session: SessionStore,
    interval: Duration,
}

impl ExpiryWatchdog {
    pub fn new(session: SessionStore, interval: Duration) -> Self {
        Self { session, interval }
    }

    /// Spawn the watchdog task: one immediate check, then one per interval.
    ///
    /// Returns the owning handle and the event receiver. Dropping the
    /// handle aborts the task, so the timer cannot outlive its owner.
    pub fn spawn(self) -> (WatchdogHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        debug!("Expiry watchdog shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        if Self::check(&self.session) {
                            // Slots are already cleared; a send failure just
                            // means the owner stopped listening.
                            let _ = event_tx.send(SessionEvent::Expired);
                        }
                    }
                }
            }
        });

        (
            WatchdogHandle {
                shutdown_tx,
                task: Some(task),
            },
            event_rx,
        )
    }

    fn check(session: &SessionStore) -> bool {
        Self::check_at(session, chrono::Utc::now().timestamp())
    }

    /// Reap the session when the stored expiry marker has lapsed. Returns
    /// `true` when both slots were cleared.
    pub(crate) fn check_at(session: &SessionStore, now: i64) -> bool {
        match session.expiry() {
            Some(expiry) if now > expiry => {
                session.clear();
                warn!("Session expired at {expiry}, cleared stored credential");
                true
            }
            _ => false,
        }
    }
}

/// Owning handle for a spawned [`ExpiryWatchdog`] task
pub struct WatchdogHandle {
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl WatchdogHandle {
    /// Signal the task to stop and wait for it to finish
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    warn!("Expiry watchdog task failed during shutdown: {e}");
                }
            }
        }
    }
}

impl Drop for WatchdogHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
