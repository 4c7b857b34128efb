use std::{
    ops::Range,
    sync::atomic::{AtomicI64, Ordering},
};

use rayon::prelude::*;
use tracing::trace;

/// Lowest value offered so far, shared between threads without locking.
#[derive(Debug)]
pub struct BestSoFar(AtomicI64);

impl BestSoFar {
    pub const fn new() -> Self {
        Self(AtomicI64::new(i64::MAX))
    }

    /// Records `value` if it beats the current best. Returns whether it did.
    pub fn offer(&self, value: i64) -> bool {
        self.0.fetch_min(value, Ordering::AcqRel) > value
    }

    /// `None` until something was offered. `i64::MAX` itself is indistinguishable from no value.
    pub fn get(&self) -> Option<i64> {
        match self.0.load(Ordering::Acquire) {
            i64::MAX => None,
            best => Some(best),
        }
    }

    fn beaten_by(&self, value: i64) -> bool {
        self.get().is_some_and(|best| best < value)
    }
}

impl Default for BestSoFar {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest value in `range` satisfying `predicate`.
///
/// Every rayon worker repeatedly claims the next `chunk` values and scans them in order. A worker
/// stops once it finds a match or claims a chunk starting above the best match so far, which
/// can't contain anything smaller.
pub fn find_first_parallel<F>(range: Range<i64>, chunk: i64, predicate: F) -> Option<i64>
where
    F: Fn(i64) -> bool + Sync,
{
    let chunk = chunk.max(1);
    let cursor = AtomicI64::new(range.start);
    let best = BestSoFar::new();

    (0..rayon::current_num_threads())
        .into_par_iter()
        .for_each(|worker| loop {
            let start = cursor
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                    Some(c.saturating_add(chunk))
                })
                .unwrap_or_else(|c| c);
            if start >= range.end || best.beaten_by(start) {
                break;
            }
            let end = start.saturating_add(chunk).min(range.end);
            trace!(worker, start, end, "scanning chunk");

            if let Some(found) = (start..end).find(|&value| predicate(value)) {
                if best.offer(found) {
                    trace!(worker, found, "new best");
                }
                break;
            }
        });

    best.get()
}
