//! Request generations
//!
//! Every tracked request takes a ticket; only the newest ticket of its kind
//! is current. A caller that runs requests off its UI thread checks the
//! ticket before showing a result, so an earlier response never replaces a
//! later one of the same kind.

use std::sync::atomic::{AtomicU64, Ordering};

/// What a tracked request does. Kinds never make each other stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Search,
    Resolve,
}

/// Identifies one tracked request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    kind: RequestKind,
    value: u64,
}

impl Ticket {
    pub fn kind(self) -> RequestKind {
        self.kind
    }

    pub fn value(self) -> u64 {
        self.value
    }
}

/// Monotonic counter for one kind of request, shareable across threads
#[derive(Debug)]
pub struct RequestGeneration {
    kind: RequestKind,
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            current: AtomicU64::new(0),
        }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Start a new request; every earlier ticket of this kind becomes stale
    pub fn begin(&self) -> Ticket {
        Ticket {
            kind: self.kind,
            value: self.current.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Whether `ticket` belongs to the most recent request of this kind
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.kind == self.kind && self.current.load(Ordering::SeqCst) == ticket.value
    }

    /// Make every outstanding ticket stale without starting a request
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_newest_ticket_is_current() {
        let generation = RequestGeneration::new(RequestKind::Search);
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert!(second.value() > first.value());
        assert_eq!(second.kind(), RequestKind::Search);
    }

    #[test]
    fn test_other_kind_is_never_current() {
        let searches = RequestGeneration::new(RequestKind::Search);
        let resolves = RequestGeneration::new(RequestKind::Resolve);
        let search = searches.begin();
        let resolve = resolves.begin();

        assert_eq!(search.value(), resolve.value());
        assert!(!resolves.is_current(search));
        assert!(!searches.is_current(resolve));
        assert!(searches.is_current(search));
    }

    #[test]
    fn test_invalidate() {
        let generation = RequestGeneration::new(RequestKind::Resolve);
        let ticket = generation.begin();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_tickets_unique_across_threads() {
        let generation = Arc::new(RequestGeneration::new(RequestKind::Search));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generation = Arc::clone(&generation);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| generation.begin().value())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);

        let last = generation.begin();
        assert_eq!(last.value(), 801);
        assert!(generation.is_current(last));
    }
}
