/*!
 * Lock Traits
 *
 * Core abstraction implemented by every busy-wait lock variant.
 *
 * # Design: Trait-Based Abstraction for Implementations
 *
 * The sweep driver uses enum dispatch ([`BenchLock`](crate::locks::BenchLock))
 * on the hot path; this trait is the seam that lets the workload and harness
 * stay generic, and lets tests substitute instrumented or no-op locks.
 */

/// Mutual-exclusion capability shared by all benchmark lock variants.
///
/// Invariant: at most one thread is between a successful [`lock`](RawLock::lock)
/// return and the matching [`unlock`](RawLock::unlock) call.
///
/// # Contract
///
/// - `lock` blocks by spinning; there is no timeout or cancellation.
/// - `unlock` assumes the calling thread holds the lock. Calling it without
///   holding the lock, or calling `lock` reentrantly from the holder, is a
///   precondition violation that no implementation checks for.
/// - Implementations hold no per-acquisition state: a lock can be acquired
///   and released any number of times and behaves like a fresh instance
///   after each release.
pub trait RawLock: Send + Sync {
    /// Acquire the lock, spinning until it becomes available.
    ///
    /// Establishes acquire ordering on success: writes made by the previous
    /// holder before its `unlock` are visible to the caller.
    fn lock(&self);

    /// Release the lock.
    ///
    /// Establishes release ordering: the caller's critical-section writes
    /// are visible to the next acquirer.
    fn unlock(&self);

    /// Variant label for reports and diagnostics.
    fn name(&self) -> &'static str;
}
