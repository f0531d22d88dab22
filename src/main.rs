/*!
 * Lockbench - Main Entry Point
 *
 * Sweeps every spinlock variant across thread counts 1..=max, timing the
 * shared-counter workload and printing the per-configuration average.
 */

use std::error::Error;
use tracing::info;

use lockbench::{init_tracing, run_trials, BenchConfig, BenchLock, LockKind};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = BenchConfig::default();
    let json_output = std::env::var("LOCKBENCH_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    info!("lockbench starting...");
    info!(
        hurdle = config.hurdle,
        trials = config.trials,
        max_threads = config.max_threads,
        json_output,
        "benchmark configuration loaded"
    );

    for kind in LockKind::ALL {
        // One lock instance per variant, swept across every thread count.
        let lock = BenchLock::new(kind);

        if !json_output {
            println!("{}", kind.label());
        }

        for threads in 1..=config.max_threads {
            let stats = run_trials(&lock, threads, &config)?;

            info!(
                variant = stats.variant,
                threads = stats.threads,
                avg_secs = stats.avg_secs,
                "configuration complete"
            );

            if json_output {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("{:.6}", stats.avg_secs);
            }
        }
    }

    info!("sweep complete");
    Ok(())
}
