/*!
 * Mutual Exclusion Tests
 *
 * Every variant must linearize the protected increment: N workers doing K
 * fixed increments each always leave the counter at exactly N * K. A single
 * lost update means the critical section overlapped.
 *
 * The stress tests are serialized because concurrent spin workloads
 * oversubscribe the CPUs and distort each other.
 */

use lockbench::{run_fixed, BenchLock, LockKind, SharedCounter};
use proptest::prelude::*;
use serial_test::serial;
use std::thread;

fn assert_no_lost_updates(kind: LockKind, threads: usize, iterations: u64) {
    let lock = BenchLock::new(kind);
    let mut counter = SharedCounter::new();

    thread::scope(|s| {
        for _ in 0..threads {
            s.spawn(|| run_fixed(&lock, &counter, iterations));
        }
    });

    assert_eq!(
        counter.value(),
        threads as u64 * iterations,
        "{} lost updates",
        kind.label()
    );
}

#[test]
#[serial]
fn tas_flag_no_lost_updates() {
    assert_no_lost_updates(LockKind::TasFlag, 4, 25_000);
}

#[test]
#[serial]
fn tas_exchange_no_lost_updates() {
    assert_no_lost_updates(LockKind::TasExchange, 4, 25_000);
}

#[test]
#[serial]
fn tas_raw_no_lost_updates() {
    assert_no_lost_updates(LockKind::TasRaw, 4, 25_000);
}

#[test]
#[serial]
fn ttas_no_lost_updates() {
    assert_no_lost_updates(LockKind::Ttas, 4, 25_000);
}

#[test]
#[serial]
fn ttas_raw_no_lost_updates() {
    assert_no_lost_updates(LockKind::TtasRaw, 4, 25_000);
}

#[test]
#[serial]
fn cas_no_lost_updates() {
    assert_no_lost_updates(LockKind::Cas, 4, 25_000);
}

#[test]
#[serial]
fn ticket_no_lost_updates() {
    assert_no_lost_updates(LockKind::Ticket, 4, 25_000);
}

#[test]
#[serial]
fn eight_workers_full_fanout() {
    for kind in LockKind::ALL {
        assert_no_lost_updates(kind, 8, 2_000);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    #[serial]
    fn no_lost_updates_at_any_scale(
        kind in prop::sample::select(LockKind::ALL.to_vec()),
        threads in 1usize..=4,
        iterations in 1u64..400,
    ) {
        let lock = BenchLock::new(kind);
        let mut counter = SharedCounter::new();

        thread::scope(|s| {
            for _ in 0..threads {
                s.spawn(|| run_fixed(&lock, &counter, iterations));
            }
        });

        prop_assert_eq!(counter.value(), threads as u64 * iterations);
    }
}
