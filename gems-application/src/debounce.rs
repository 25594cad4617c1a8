use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Trailing-edge debouncing of values.
///
/// Only the most recent value survives a burst of triggers
/// and it is released after the quiet period has elapsed.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the pending value and restart the quiet period.
    pub fn trigger(&mut self, value: T) {
        self.pending = Some((Instant::now() + self.delay, value));
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    /// Wait until the pending value is due.
    ///
    /// Never resolves while nothing is pending. The value is only
    /// taken on completion, so dropping the future (e.g. in
    /// `tokio::select!`) does not lose it.
    pub async fn ready(&mut self) -> T {
        loop {
            let Some(deadline) = self.pending.as_ref().map(|(deadline, _)| *deadline) else {
                return std::future::pending().await;
            };
            sleep_until(deadline).await;
            if let Some((_, value)) = self.pending.take() {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, timeout};

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn release_after_quiet_period() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.trigger(1);
        assert_eq!(debouncer.ready().await, 1);
        assert_eq!(start.elapsed(), DELAY);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_last_value_of_a_burst() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.trigger(1);
        sleep(Duration::from_millis(200)).await;
        debouncer.trigger(2);
        sleep(Duration::from_millis(200)).await;
        debouncer.trigger(3);
        assert_eq!(debouncer.ready().await, 3);
        assert_eq!(start.elapsed(), Duration::from_millis(900));
        assert!(timeout(Duration::from_secs(5), debouncer.ready())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_pending_never_resolves() {
        let mut debouncer = Debouncer::<()>::new(DELAY);
        assert!(timeout(Duration::from_secs(5), debouncer.ready())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_the_value() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger("a");
        assert_eq!(debouncer.cancel(), Some("a"));
        assert!(timeout(DELAY * 2, debouncer.ready()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_wait_keeps_the_value() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger(7);
        assert!(timeout(Duration::from_millis(100), debouncer.ready())
            .await
            .is_err());
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.ready().await, 7);
    }
}
