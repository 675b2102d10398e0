//! Explicit timing interceptors composed around engine calls.

use std::time::Instant;

use tracing::debug;

/// Run `f`, logging its wall-clock duration under `op`.
pub fn timed<T>(op: &'static str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    debug!(op, elapsed_us = start.elapsed().as_micros() as u64, "operation complete");
    out
}
