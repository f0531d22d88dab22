/*!
 * Lock Variant Selection
 *
 * Runtime selector for the benchmarked algorithms
 */

/// Lock algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockKind {
    /// Test-and-set via `fetch_or` on a flag
    TasFlag,
    /// Test-and-set via atomic exchange
    TasExchange,
    /// Test-and-set through a raw atomic view of plain memory
    TasRaw,
    /// Test-and-test-and-set (read spin before the exchange)
    Ttas,
    /// Test-and-test-and-set through a raw atomic view
    TtasRaw,
    /// Compare-and-swap
    Cas,
    /// Fetch-and-add ticket lock (FIFO-fair)
    Ticket,
}

impl LockKind {
    /// Every variant, in the order the sweep driver reports them.
    pub const ALL: [LockKind; 7] = [
        LockKind::TasFlag,
        LockKind::TasExchange,
        LockKind::TasRaw,
        LockKind::Ttas,
        LockKind::TtasRaw,
        LockKind::Cas,
        LockKind::Ticket,
    ];

    /// Stable label used in report headers and structured log fields.
    pub const fn label(self) -> &'static str {
        match self {
            LockKind::TasFlag => "tas-flag",
            LockKind::TasExchange => "tas-exchange",
            LockKind::TasRaw => "tas-raw",
            LockKind::Ttas => "ttas",
            LockKind::TtasRaw => "ttas-raw",
            LockKind::Cas => "cas",
            LockKind::Ticket => "ticket",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        for (i, a) in LockKind::ALL.iter().enumerate() {
            for b in &LockKind::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
