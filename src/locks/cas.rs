/*!
 * Compare-and-Swap Lock
 *
 * Acquire by atomically transitioning the state from free to held; the CAS
 * fails (and the caller keeps spinning) whenever another thread holds the
 * lock or wins the race.
 */

use super::traits::RawLock;
use std::hint;
use std::sync::atomic::{AtomicBool, Ordering};

/// Spinlock acquired via compare-and-swap on a boolean state.
pub struct CasLock {
    state: AtomicBool,
}

impl CasLock {
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

impl Default for CasLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for CasLock {
    #[inline]
    fn lock(&self) {
        while self
            .state
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            hint::spin_loop();
        }
    }

    #[inline]
    fn unlock(&self) {
        // The holder is the only thread that can observe `true` here, so
        // this CAS cannot fail under the lock contract.
        let _ = self
            .state
            .compare_exchange(true, false, Ordering::Release, Ordering::Relaxed);
    }

    fn name(&self) -> &'static str {
        "cas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_release() {
        let lock = CasLock::new();
        lock.lock();
        assert!(lock.is_locked());
        lock.unlock();
        assert!(!lock.is_locked());
    }

    #[test]
    fn sequential_reuse() {
        let lock = CasLock::new();
        for _ in 0..100 {
            lock.lock();
            lock.unlock();
        }
        assert!(!lock.is_locked());
    }
}
