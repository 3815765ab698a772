use log::debug;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time;

#[cfg(test)]
mod tests;

/// A countdown that fires exactly once. Dropping the handle cancels the countdown.
#[derive(Debug)]
pub struct Deadline {
    expiry: oneshot::Receiver<()>,
    timer: JoinHandle<()>,
    expired: bool,
}

impl Deadline {
    /// Must be called from within a tokio runtime.
    pub fn start(duration: Duration) -> Self {
        let (sender, expiry) = oneshot::channel();
        let timer = tokio::spawn(async move {
            time::sleep(duration).await;
            // Never blocks, even when the quiz is no longer listening.
            if sender.send(()).is_err() {
                debug!("Deadline fired after the quiz ended");
            }
        });
        debug!("Deadline started: {:?}", duration);
        Deadline {
            expiry,
            timer,
            expired: false,
        }
    }

    /// Resolves once the countdown has elapsed. Safe to use as a `select!` branch.
    pub async fn expired(&mut self) {
        if self.expired {
            return;
        }
        // The sender only disappears without sending when the timer is aborted,
        // which requires dropping this handle first.
        let _ = (&mut self.expiry).await;
        self.expired = true;
        debug!("Deadline expired");
    }

    pub fn is_expired(&mut self) -> bool {
        if !self.expired && self.expiry.try_recv().is_ok() {
            self.expired = true;
        }
        self.expired
    }

    /// Cancels the countdown if it is still running.
    pub fn stop(self) {}
}

impl Drop for Deadline {
    fn drop(&mut self) {
        if !self.timer.is_finished() {
            debug!("Deadline cancelled");
        }
        self.timer.abort();
    }
}
