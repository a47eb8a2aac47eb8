pub mod file;
pub mod record;

pub use file::{FileCandidate, IntakeReport, PendingFile, RejectReason, Rejection};
pub use record::{ProcessingFlags, ProcessingRecord, RecordStatus};
