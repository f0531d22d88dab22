/*!
 * Test-and-Set Locks
 *
 * Three renditions of the same algorithm: spin on an atomic
 * read-modify-write that sets the state and reports the previous value,
 * acquire when the previous value was "unset".
 *
 * The renditions exist to compare the cost of the abstraction, not the
 * algorithm: [`TasFlagLock`] uses `fetch_or` (set-and-test-previous on a
 * flag), [`TasExchangeLock`] uses `swap` on a typed atomic cell, and
 * [`TasRawLock`] performs the same swap through a raw atomic view of plain
 * memory, the way a compiler intrinsic would.
 */

use super::traits::RawLock;
use std::cell::UnsafeCell;
use std::hint;
use std::sync::atomic::{AtomicBool, Ordering};

/// Test-and-set lock over a boolean flag.
///
/// Acquire spins on `fetch_or(true)` until the previous value was `false`;
/// release clears the flag.
pub struct TasFlagLock {
    state: AtomicBool,
}

impl TasFlagLock {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: AtomicBool::new(false),
        }
    }

    /// Whether some thread currently holds the lock.
    #[inline(always)]
    pub fn is_locked(&self) -> bool {
        self.state.load(Ordering::Relaxed)
    }
}

impl Default for TasFlagLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for TasFlagLock {
    #[inline]
    fn lock(&self) {
        // fetch_or is the set-and-test-previous primitive: it returns the
        // prior value in one indivisible step.
        while self.state.fetch_or(true, Ordering::Acquire) {
            hint::spin_loop();
        }
    }

    #[inline]
    fn unlock(&self) {
        self.state.store(false, Ordering::Release);
    }

    fn name(&self) -> &'static str {
        "tas-flag"
    }
}

/// Test-and-set lock using an atomic exchange.
///
/// Functionally identical to [`TasFlagLock`]; the spin issues `swap(true)`
/// and acquires when the returned previous value is `false`.
pub struct TasExchangeLock {
    state: AtomicBool,
}

impl TasExchangeLock {
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

impl Default for TasExchangeLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for TasExchangeLock {
    #[inline]
    fn lock(&self) {
        while self.state.swap(true, Ordering::Acquire) {
            hint::spin_loop();
        }
    }

    #[inline]
    fn unlock(&self) {
        self.state.store(false, Ordering::Release);
    }

    fn name(&self) -> &'static str {
        "tas-exchange"
    }
}

/// Test-and-set lock operating on plain memory through a raw atomic view.
///
/// Same exchange loop as [`TasExchangeLock`], but the state lives in an
/// `UnsafeCell<bool>` and every access goes through [`AtomicBool::from_ptr`].
/// This measures what the typed atomic abstraction costs over issuing the
/// operation directly against untyped shared memory.
pub struct TasRawLock {
    state: UnsafeCell<bool>,
}

// Safety: `state` is only ever accessed through the atomic view returned by
// `view()`, which enforces mutual exclusion on the protected side.
unsafe impl Send for TasRawLock {}
unsafe impl Sync for TasRawLock {}

impl TasRawLock {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: UnsafeCell::new(false),
        }
    }

    /// Atomic view of the raw state cell.
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

impl Default for TasRawLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for TasRawLock {
    #[inline]
    fn lock(&self) {
        while self.view().swap(true, Ordering::Acquire) {
            hint::spin_loop();
        }
    }

    #[inline]
    fn unlock(&self) {
        self.view().store(false, Ordering::Release);
    }

    fn name(&self) -> &'static str {
        "tas-raw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn flag_lock_acquire_release() {
        let lock = TasFlagLock::new();
        assert!(!lock.is_locked());

        lock.lock();
        assert!(lock.is_locked());
        lock.unlock();
        assert!(!lock.is_locked());
    }

    #[test]
    fn exchange_lock_blocks_second_acquirer() {
        let lock = TasExchangeLock::new();
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

    #[test]
    fn raw_lock_acquire_release() {
        let lock = TasRawLock::new();

        lock.lock();
        assert!(lock.is_locked());
        lock.unlock();
        assert!(!lock.is_locked());
    }
}
