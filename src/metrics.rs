use std::sync::atomic::{AtomicU64, Ordering};
use serde::Serialize;

/// Process-lifetime counters for relay outcomes. Never reset.
#[derive(Debug, Default)]
pub struct Metrics {
    pub requests: AtomicU64,
    pub replies: AtomicU64,
    pub fallbacks: AtomicU64,
    pub rejected: AtomicU64,
    pub failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {

        Self::default()

    }

    pub fn record_request(&self) {

        self.requests.fetch_add(1, Ordering::Relaxed);

    }

    pub fn record_reply(&self) {

        self.replies.fetch_add(1, Ordering::Relaxed);

    }

    pub fn record_fallback(&self) {

        self.fallbacks.fetch_add(1, Ordering::Relaxed);

    }

    pub fn record_rejected(&self) {

        self.rejected.fetch_add(1, Ordering::Relaxed);

    }

    pub fn record_failure(&self) {

        self.failures.fetch_add(1, Ordering::Relaxed);

    }

    pub fn snapshot(&self) -> MetricsSnapshot {

        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            replies: self.replies.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub replies: u64,
    pub fallbacks: u64,
    pub rejected: u64,
    pub failures: u64,
}

impl MetricsSnapshot {
    /// Share of requests answered with a 200, fallback replies included.
    pub fn reply_rate(&self) -> f64 {

        if self.requests == 0 {
            return 0.0;
        }
        let answered = self.replies + self.fallbacks;
        (answered as f64 / self.requests as f64) * 100.0

    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_reply_rate_counts_fallbacks_as_answered() {

        let metrics = Metrics::new();
        metrics.record_request();
        metrics.record_reply();
        metrics.record_request();
        metrics.record_fallback();
        metrics.record_request();
        metrics.record_failure();
        metrics.record_request();
        metrics.record_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests, 4);
        assert_eq!(snapshot.reply_rate(), 50.0);

    }

    #[test]
    fn test_reply_rate_is_zero_without_requests() {

        assert_eq!(Metrics::new().snapshot().reply_rate(), 0.0);

    }

}
