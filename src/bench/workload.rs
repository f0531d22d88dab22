/*!
 * Worker Workloads
 *
 * The loops each worker thread runs against the shared counter. Two modes:
 * hurdle-driven (the benchmark proper) and fixed-count (exact increment
 * totals for correctness tests and fixed-work benchmarks).
 */

use super::counter::SharedCounter;
use crate::locks::RawLock;

/// Increment the counter under the lock until the post-increment value
/// exceeds `hurdle`.
///
/// Each worker observes the value it just wrote and stops independently,
/// so with N workers the final counter may overshoot the hurdle by up to
/// N - 1: several workers can each capture a just-over-hurdle value before
/// any of them stops. The overshoot is an accepted approximate termination
/// condition, not an error to normalize away.
pub fn run_until_hurdle<L: RawLock>(lock: &L, counter: &SharedCounter, hurdle: u64) {
    loop {
        lock.lock();
        // Safety: between lock()/unlock() on the lock protecting `counter`.
        let reached = unsafe { counter.fetch_increment() };
        lock.unlock();

        if reached > hurdle {
            return;
        }
    }
}

/// Perform exactly `iterations` protected increments.
///
/// With N workers the final counter value is exactly N * `iterations` -
/// the mutual-exclusion property the tests pin down.
pub fn run_fixed<L: RawLock>(lock: &L, counter: &SharedCounter, iterations: u64) {
    for _ in 0..iterations {
        lock.lock();
        // Safety: between lock()/unlock() on the lock protecting `counter`.
        unsafe {
            counter.fetch_increment();
        }
        lock.unlock();
    }
}
