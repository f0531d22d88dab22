/*!
 * Busy-Wait Lock Variants
 *
 * Seven spinlock algorithms behind one capability contract, differing only
 * in internal state and choice of atomic read-modify-write operation:
 *
 * - Test-and-set: [`TasFlagLock`] (fetch_or), [`TasExchangeLock`] (swap),
 *   [`TasRawLock`] (swap through a raw atomic view of plain memory)
 * - Test-and-test-and-set: [`TtasLock`], [`TtasRawLock`]
 * - Compare-and-swap: [`CasLock`]
 * - Fetch-and-add ticket: [`TicketLock`] (the only FIFO-fair variant)
 *
 * # Architecture
 *
 * The [`RawLock`] trait is the seam used by the workload and the timing
 * harness; [`BenchLock`] provides enum dispatch over the variants so the
 * sweep driver can select an algorithm at runtime without a vtable.
 *
 * # Contract
 *
 * Acquisition is a pure busy-wait: a contending thread burns cycles until
 * the lock is free. No yielding, sleeping, timeout, or cancellation -
 * isolating the cost of the atomic operation is the point. A missed
 * release livelocks every waiter.
 */

mod bench_lock;
mod cas;
mod kind;
mod tas;
mod ticket;
mod traits;
mod ttas;

pub use bench_lock::BenchLock;
pub use cas::CasLock;
pub use kind::LockKind;
pub use tas::{TasExchangeLock, TasFlagLock, TasRawLock};
pub use ticket::TicketLock;
pub use traits::RawLock;
pub use ttas::{TtasLock, TtasRawLock};
