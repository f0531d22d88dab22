/*!
 * Timing Harness
 *
 * Runs the hurdle workload on N racing worker threads, measures wall-clock
 * duration per trial, and averages over the configured trial count.
 *
 * # Guarantees
 *
 * - Every worker is joined before a trial's duration is finalized; scoped
 *   threads make that structural rather than a bookkeeping obligation.
 * - If a worker thread fails to start, the configuration aborts with
 *   [`HarnessError::Spawn`] and no partial result is produced.
 * - No scheduling or fairness guarantee beyond what the lock variant
 *   itself provides. A lock that misses a release livelocks the trial;
 *   there is no timeout anywhere in the harness.
 */

use super::config::BenchConfig;
use super::counter::SharedCounter;
use super::workload;
use crate::locks::RawLock;
use serde::Serialize;
use std::io;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Harness failures. Worker-thread creation is the only recoverable-shaped
/// error in the system, and even it is fatal to the run by policy.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Averaged timing for one (lock variant, thread count) configuration.
#[derive(Debug, Clone, Serialize)]
pub struct TrialStats {
    /// Lock variant label
    pub variant: &'static str,
    /// Worker threads racing on the counter
    pub threads: usize,
    /// Trials the average was computed over
    pub trials: u32,
    /// Arithmetic mean of per-trial wall-clock durations, in seconds
    pub avg_secs: f64,
}

/// Run the hurdle workload `config.trials` times on `threads` workers
/// sharing `lock`, and return the averaged wall-clock timing.
///
/// One counter serves the whole configuration and is reset at the start of
/// every trial. The lock instance is supplied by the caller so one instance
/// can be swept across all thread counts, matching its benchmark lifecycle.
pub fn run_trials<L: RawLock>(
    lock: &L,
    threads: usize,
    config: &BenchConfig,
) -> HarnessResult<TrialStats> {
    debug_assert!(threads >= 1, "a trial needs at least one worker");

    let mut counter = SharedCounter::new();
    let mut total = Duration::ZERO;
    let hurdle = config.hurdle;

    for trial in 0..config.trials {
        counter.reset();
        let started = Instant::now();

        thread::scope(|scope| -> HarnessResult<()> {
            for worker in 0..threads {
                let builder = thread::Builder::new().name(format!("worker-{worker}"));
                let counter = &counter;
                builder.spawn_scoped(scope, move || {
                    workload::run_until_hurdle(lock, counter, hurdle)
                })?;
            }
            Ok(())
            // Scope exit joins every spawned worker before `elapsed` runs.
        })?;

        let elapsed = started.elapsed();
        total += elapsed;
        debug!(
            trial,
            elapsed_secs = elapsed.as_secs_f64(),
            counter = counter.value(),
            "trial complete"
        );
    }

    Ok(TrialStats {
        variant: lock.name(),
        threads,
        trials: config.trials,
        avg_secs: total.as_secs_f64() / f64::from(config.trials),
    })
}
