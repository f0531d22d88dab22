/*!
 * Benchmark Configuration
 *
 * Process-wide constants, immutable after startup
 */

/// Benchmark run configuration.
///
/// Built once by the driver and passed by reference everywhere; nothing
/// mutates it after startup. The defaults are the canonical sweep.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Counter value past which workers stop incrementing.
    pub hurdle: u64,
    /// Trials averaged per (variant, thread count) configuration.
    pub trials: u32,
    /// Upper bound of the thread-count sweep (inclusive, starting at 1).
    pub max_threads: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            hurdle: 1_000_000,
            trials: 10,
            max_threads: 8,
        }
    }
}

impl BenchConfig {
    /// Small configuration for tests and smoke runs.
    pub const fn quick() -> Self {
        Self {
            hurdle: 1_000,
            trials: 3,
            max_threads: 4,
        }
    }
}
