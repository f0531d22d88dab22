/*!
 * Lockbench Library
 * Spinlock contention microbenchmark exposed as a library
 */

pub mod bench;
pub mod locks;
pub mod telemetry;

// Re-exports
pub use bench::{
    run_fixed, run_until_hurdle, run_trials, BenchConfig, HarnessError, HarnessResult,
    SharedCounter, TrialStats,
};
pub use locks::{
    BenchLock, CasLock, LockKind, RawLock, TasExchangeLock, TasFlagLock, TasRawLock, TicketLock,
    TtasLock, TtasRawLock,
};
pub use telemetry::init_tracing;
