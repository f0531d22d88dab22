/*!
 * Runtime-Selected Lock
 *
 * Enum dispatch over the lock variants.
 *
 * # Design: Enum Dispatch for Zero-Cost Abstraction
 *
 * The active variant is chosen once per benchmark configuration, so there
 * is no reason to pay for `dyn RawLock` on every acquire: an enum with
 * `#[inline(always)]` match delegation keeps the hot path monomorphic and
 * free of vtable lookups.
 */

use super::cas::CasLock;
use super::kind::LockKind;
use super::tas::{TasExchangeLock, TasFlagLock, TasRawLock};
use super::ticket::TicketLock;
use super::traits::RawLock;
use super::ttas::{TtasLock, TtasRawLock};

/// A lock variant selected at runtime from a [`LockKind`].
pub enum BenchLock {
    TasFlag(TasFlagLock),
    TasExchange(TasExchangeLock),
    TasRaw(TasRawLock),
    Ttas(TtasLock),
    TtasRaw(TtasRawLock),
    Cas(CasLock),
    Ticket(TicketLock),
}

impl BenchLock {
    /// Construct a fresh, unlocked instance of the selected variant.
    pub fn new(kind: LockKind) -> Self {
        match kind {
            LockKind::TasFlag => Self::TasFlag(TasFlagLock::new()),
            LockKind::TasExchange => Self::TasExchange(TasExchangeLock::new()),
            LockKind::TasRaw => Self::TasRaw(TasRawLock::new()),
            LockKind::Ttas => Self::Ttas(TtasLock::new()),
            LockKind::TtasRaw => Self::TtasRaw(TtasRawLock::new()),
            LockKind::Cas => Self::Cas(CasLock::new()),
            LockKind::Ticket => Self::Ticket(TicketLock::new()),
        }
    }

    /// The selector this instance was built from.
    pub fn kind(&self) -> LockKind {
        match self {
            Self::TasFlag(_) => LockKind::TasFlag,
            Self::TasExchange(_) => LockKind::TasExchange,
            Self::TasRaw(_) => LockKind::TasRaw,
            Self::Ttas(_) => LockKind::Ttas,
            Self::TtasRaw(_) => LockKind::TtasRaw,
            Self::Cas(_) => LockKind::Cas,
            Self::Ticket(_) => LockKind::Ticket,
        }
    }
}

impl RawLock for BenchLock {
    #[inline(always)]
    fn lock(&self) {
        match self {
            Self::TasFlag(l) => l.lock(),
            Self::TasExchange(l) => l.lock(),
            Self::TasRaw(l) => l.lock(),
            Self::Ttas(l) => l.lock(),
            Self::TtasRaw(l) => l.lock(),
            Self::Cas(l) => l.lock(),
            Self::Ticket(l) => l.lock(),
        }
    }

    #[inline(always)]
    fn unlock(&self) {
        match self {
            Self::TasFlag(l) => l.unlock(),
            Self::TasExchange(l) => l.unlock(),
            Self::TasRaw(l) => l.unlock(),
            Self::Ttas(l) => l.unlock(),
            Self::TtasRaw(l) => l.unlock(),
            Self::Cas(l) => l.unlock(),
            Self::Ticket(l) => l.unlock(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::TasFlag(l) => l.name(),
            Self::TasExchange(l) => l.name(),
            Self::TasRaw(l) => l.name(),
            Self::Ttas(l) => l.name(),
            Self::TtasRaw(l) => l.name(),
            Self::Cas(l) => l.name(),
            Self::Ticket(l) => l.name(),
        }
    }
}
