use crate::models::PendingFile;
use crate::results::ResultsStore;

/// All mutable state of one processing session: the pending-upload queue,
/// the append-only results store, and the shared id counter.
/// Owned by the app's managed state; guarded by a single async mutex so the
/// simulator task is the only writer at any point in time.
#[derive(Debug, Default)]
pub struct SessionState {
    pub pending: Vec<PendingFile>,
    pub store: ResultsStore,
    next_id: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids start at 1 and never reset within a session, even across batches.
    pub fn next_record_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_session_wide_and_monotonic() {
        let mut session = SessionState::new();
        assert_eq!(session.next_record_id(), 1);
        assert_eq!(session.next_record_id(), 2);

        // A new "batch" does not reset the counter.
        session.pending.clear();
        assert_eq!(session.next_record_id(), 3);
    }
}
