//! Admission control and in-flight accounting for graceful shutdown.
//!
//! Every RPC enters the [`InflightTracker`] before touching the store and
//! holds the returned [`InflightGuard`] until it responds. Once
//! [`InflightTracker::shutdown`] is called, new calls are refused with
//! [`Error::ServiceShutdown`] and the tracker waits, up to a timeout, for
//! the calls already admitted to finish.

use core::time::Duration;
use employee_tonic_core::Error;
use portable_atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::time::{sleep, timeout};

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
pub struct InflightTracker {
    shutting_down: AtomicBool,
    inflight: AtomicUsize,
}

/// Marks one admitted call. Dropping it releases the slot.
#[derive(Debug)]
pub struct InflightGuard<'a> {
    tracker: &'a InflightTracker,
}

impl InflightTracker {
    pub const fn new() -> Self {
        Self {
            shutting_down: AtomicBool::new(false),
            inflight: AtomicUsize::new(0),
        }
    }

    /// Admits a call unless shutdown has begun.
    ///
    /// The counter is incremented before the shutdown flag is read, so a call
    /// admitted concurrently with [`shutdown`](Self::shutdown) is always
    /// observed by the drain loop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceShutdown`] once shutdown has started.
    pub fn enter(&self) -> Result<InflightGuard<'_>, Error> {
        self.inflight.fetch_add(1, Ordering::SeqCst);
        let guard = InflightGuard { tracker: self };
        if self.shutting_down.load(Ordering::SeqCst) {
            return Err(Error::ServiceShutdown);
        }
        Ok(guard)
    }

    pub fn inflight(&self) -> usize {
        self.inflight.load(Ordering::SeqCst)
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::SeqCst)
    }

    /// Stops admitting calls and waits up to `drain_timeout` for admitted
    /// calls to complete.
    ///
    /// Returns `true` if every in-flight call finished within the timeout.
    pub async fn shutdown(&self, drain_timeout: Duration) -> bool {
        self.shutting_down.store(true, Ordering::SeqCst);
        tracing::info!(inflight = self.inflight(), "Refusing new requests, draining");

        let drained = timeout(drain_timeout, async {
            while self.inflight() > 0 {
                sleep(DRAIN_POLL_INTERVAL).await;
            }
        })
        .await
        .is_ok();

        if drained {
            tracing::debug!("All in-flight requests drained");
        } else {
            tracing::warn!(
                inflight = self.inflight(),
                "Graceful drain timed out with requests still active"
            );
        }
        drained
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        self.tracker.inflight.fetch_sub(1, Ordering::SeqCst);
    }
}
