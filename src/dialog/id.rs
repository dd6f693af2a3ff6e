//! Unique ids for dialogs rendered without one

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate an id unique within this process
///
/// Timestamp-derived hex like PHP's `uniqid()`, followed by a process-wide
/// sequence number so two calls in the same microsecond still differ.
pub fn unique_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let id = format!("{:08x}{:05x}{:x}", now.as_secs(), now.subsec_micros(), seq);
    tracing::debug!(id = %id, "generated dialog id");
    id
}
