use std::{future::Future, time::Duration};

use crate::Result;

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Repeat failed requests after a fixed delay.
///
/// Only transient errors are retried, see [`crate::Error::is_transient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of additional attempts after the first one.
    pub retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub const fn never() -> Self {
        Self {
            retries: 0,
            delay: Duration::ZERO,
        }
    }

    pub async fn run<T, F, Fut>(&self, mut request: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            match request().await {
                Err(err) if err.is_transient() && attempt < self.retries => {
                    attempt += 1;
                    log::warn!(
                        "Request failed ({attempt}/{}), retrying in {:?}: {err}",
                        self.retries,
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(err) => {
                    if attempt > 0 {
                        log::debug!("Giving up after {} attempts", attempt + 1);
                    }
                    return Err(err);
                }
                ok => return ok,
            }
        }
    }
}
