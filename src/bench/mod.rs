/*!
 * Benchmark Engine
 *
 * The shared-counter workload that worker threads execute under a lock,
 * and the timing harness that spawns them, measures wall-clock duration,
 * and averages over a fixed number of trials.
 */

mod config;
mod counter;
mod harness;
mod workload;

pub use config::BenchConfig;
pub use counter::SharedCounter;
pub use harness::{run_trials, HarnessError, HarnessResult, TrialStats};
pub use workload::{run_fixed, run_until_hurdle};
