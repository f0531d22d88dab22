/*!
 * Test-and-Test-and-Set Locks
 *
 * TTAS spins on a plain read until the lock looks free, and only then
 * attempts the exchange. While the lock is held this keeps contenders in
 * the shared cache-line state instead of bouncing it with failed
 * read-modify-writes.
 */

use super::traits::RawLock;
use std::cell::UnsafeCell;
use std::hint;
use std::sync::atomic::{AtomicBool, Ordering};

/// Test-and-test-and-set lock on a typed atomic cell.
pub struct TtasLock {
    state: AtomicBool,
}

impl TtasLock {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: AtomicBool::new(false),
        }
    }

    #[inline(always)]
    pub fn is_locked(&self) -> bool {
        self.state.load(Ordering::Relaxed)
    }
}

impl Default for TtasLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for TtasLock {
    #[inline]
    fn lock(&self) {
        loop {
            // Read-only spin while the lock is held; no write traffic.
            while self.state.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
            // Observed free: race for it. Another thread may win, in which
            // case we fall back to the read spin.
            if !self.state.swap(true, Ordering::Acquire) {
                return;
            }
        }
    }

    #[inline]
    fn unlock(&self) {
        self.state.store(false, Ordering::Release);
    }

    fn name(&self) -> &'static str {
        "ttas"
    }
}

/// Test-and-test-and-set lock on plain memory through a raw atomic view.
///
/// Same read-then-swap structure as [`TtasLock`] with both the spin read and
/// the exchange issued through [`AtomicBool::from_ptr`], mirroring
/// [`TasRawLock`](super::TasRawLock) for the abstraction-cost comparison.
pub struct TtasRawLock {
    state: UnsafeCell<bool>,
}

// Safety: `state` is only ever accessed through the atomic view.
unsafe impl Send for TtasRawLock {}
unsafe impl Sync for TtasRawLock {}

impl TtasRawLock {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: UnsafeCell::new(false),
        }
    }

    #[inline(always)]
    fn view(&self) -> &AtomicBool {
        // Safety: the pointer is valid and aligned for the lifetime of
        // `self`, and the cell is never accessed non-atomically.
        unsafe { AtomicBool::from_ptr(self.state.get()) }
    }

    #[inline(always)]
    pub fn is_locked(&self) -> bool {
        self.view().load(Ordering::Relaxed)
    }
}

impl Default for TtasRawLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for TtasRawLock {
    #[inline]
    fn lock(&self) {
        loop {
            while self.view().load(Ordering::Relaxed) {
                hint::spin_loop();
            }
            if !self.view().swap(true, Ordering::Acquire) {
                return;
            }
        }
    }

    #[inline]
    fn unlock(&self) {
        self.view().store(false, Ordering::Release);
    }

    fn name(&self) -> &'static str {
        "ttas-raw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn acquire_release() {
        let lock = TtasLock::new();
        lock.lock();
        assert!(lock.is_locked());
        lock.unlock();
        assert!(!lock.is_locked());
    }

    #[test]
    fn handoff_between_threads() {
        let lock = TtasRawLock::new();
        lock.lock();

        thread::scope(|s| {
            let waiter = s.spawn(|| {
                lock.lock();
                lock.unlock();
            });
            lock.unlock();
            waiter.join().unwrap();
        });
        assert!(!lock.is_locked());
    }
}
