use std::sync::atomic::{AtomicU64, Ordering};

/// Handle for one issued query. Only the most recent ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

/// Last-query-wins bookkeeping for callers that let a newer filter or page
/// supersede a request still in flight.
#[derive(Debug, Default)]
pub struct QueryGuard {
    latest: AtomicU64,
}

impl QueryGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query; every earlier ticket becomes stale.
    pub fn issue(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Pass the result through only if nothing newer has been issued.
    pub fn accept<T>(&self, ticket: QueryTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(ticket = ticket.0, "Discarding superseded query result");
            None
        }
    }
}
