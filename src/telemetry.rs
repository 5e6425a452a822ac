//! Elapsed-time instrumentation for the CLI entry points.

use std::time::Instant;

use log::debug;

/// Run `f`, log how long it took, and hand its output back unchanged.
///
/// Advisory only: timing never affects control flow or results.
pub fn timed<T>(op: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    debug!("{} took {:.3?}", op, start.elapsed());
    out
}
