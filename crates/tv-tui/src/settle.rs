//! SettleTimer — deferred, cancellable one-shot that reports a selection as
//! ready after the settle delay.
//!
//! Only one timer is ever pending: scheduling aborts the previous task. The
//! session additionally rejects stale tickets by generation, so an abort that
//! loses the race against an already-queued message is still harmless.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::trace;

#[derive(Default)]
pub struct SettleTimer {
    pending: Option<AbortHandle>,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post `msg` on `tx` after `delay`, cancelling any pending timer.
    pub fn schedule<T: Send + 'static>(&mut self, delay: Duration, msg: T, tx: mpsc::Sender<T>) {
        self.cancel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(msg).await;
        });
        self.pending = Some(handle.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            trace!("settle timer cancelled");
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for SettleTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
