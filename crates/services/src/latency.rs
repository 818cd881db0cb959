//! Injectable artificial latency.
//!
//! Every service operation pauses for a fixed duration before touching its
//! collection, emulating network latency so the UI layer can exercise its
//! loading states. The pause length is decided by a [`LatencyPolicy`] given
//! at construction, so tests swap in [`Instant`] and run without waiting.

use std::time::Duration;

/// Decides how long an operation actually pauses, given the operation's
/// nominal latency.
pub trait LatencyPolicy: Send + Sync {
    /// Map an operation's nominal latency to the pause to apply.
    fn pause_for(&self, nominal: Duration) -> Duration;
}

/// Production policy: pause for exactly the nominal latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulated;

impl LatencyPolicy for Simulated {
    fn pause_for(&self, nominal: Duration) -> Duration {
        nominal
    }
}

/// Test policy: never pause.
#[derive(Debug, Clone, Copy, Default)]
pub struct Instant;

impl LatencyPolicy for Instant {
    fn pause_for(&self, _nominal: Duration) -> Duration {
        Duration::ZERO
    }
}

/// Suspend the caller according to `policy`.
///
/// The sleep happens before any collection lock is taken, so an abandoned
/// write that never gets polled past this point leaves the store untouched.
pub(crate) async fn pause(policy: &dyn LatencyPolicy, nominal: Duration) {
    let pause = policy.pause_for(nominal);
    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }
}
