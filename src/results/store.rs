use crate::models::{ProcessingRecord, RecordStatus};

/// Append-only collection of every record produced this session.
/// Source of truth for the table, stats, and chart projections.
/// Lives until the app is torn down; a session reset recreates it.
#[derive(Debug, Default)]
pub struct ResultsStore {
    records: Vec<ProcessingRecord>,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids must arrive strictly increasing; the simulator is the only
    /// writer and assigns them in completion order.
    pub fn append(&mut self, record: ProcessingRecord) {
        debug_assert!(
            self.records.last().map_or(true, |last| last.id < record.id),
            "record ids must be strictly increasing"
        );
        self.records.push(record);
    }

    pub fn all(&self) -> &[ProcessingRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn count_by_status(&self, status: RecordStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    pub fn find(&self, id: u64) -> Option<&ProcessingRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}
