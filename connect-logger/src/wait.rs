//! Bounded fixed-interval readiness polling.
//!
//! The dashboard renders its pages client-side and exposes no completion
//! signal, so every phase waits by re-evaluating a condition against the
//! rendered state at a fixed cadence. No backoff, no jitter: the target's
//! rendering latency is bounded and small.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::errors::SessionError;

/// Attempt budget used by every wait point in a session.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Cadence between condition evaluations.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Polls `condition` until it reports readiness or the attempt budget is
/// exhausted.
///
/// Attempts are counted from 1 and each one sleeps `interval` before
/// evaluating, so a condition satisfied on attempt K is evaluated exactly K
/// times. An error returned by the condition itself propagates immediately;
/// exhausting `max_attempts` yields [`SessionError::ReadinessTimeout`]
/// carrying `what`.
pub async fn wait_until<F, Fut>(
    what: &str,
    max_attempts: u32,
    interval: Duration,
    mut condition: F,
) -> Result<(), SessionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, SessionError>>,
{
    for attempt in 1..=max_attempts {
        tokio::time::sleep(interval).await;
        if condition().await? {
            debug!(what, attempt, "readiness condition satisfied");
            return Ok(());
        }
    }
    debug!(what, max_attempts, "readiness condition never satisfied");
    Err(SessionError::ReadinessTimeout(what.to_string()))
}
