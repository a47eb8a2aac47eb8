use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::Mutex;
use tokio::time;

use crate::models::{PendingFile, ProcessingFlags, ProcessingRecord, RecordStatus};
use crate::session::SessionState;
use crate::utils::{document_type, round2};

/// Canned insights attached to every record, in fixed order. Records get
/// the first k entries (k in {2,3,4}), never a shuffle, so identical lists
/// repeat across files whenever k matches.
pub const INSIGHT_CATALOG: [&str; 5] = [
    "Document structure is clear and well-organized",
    "Key entities identified with high confidence",
    "Content matches expected format patterns",
    "No anomalies detected during processing",
    "All required fields successfully extracted",
];

const FAILURE_PROBABILITY: f64 = 0.10;

/// Source of the randomized work parameters. Injectable so tests can drive
/// the pipeline with deterministic values.
pub trait WorkSampler: Send {
    /// Simulated work duration in seconds, uniform in [1.0, 4.0).
    fn latency_secs(&mut self) -> f64;
    /// Terminal status; Failed with probability 0.10.
    fn outcome(&mut self) -> RecordStatus;
    /// Confidence score, uniform in [70.0, 100.0).
    fn confidence_percent(&mut self) -> f64;
    /// How many catalog insights to attach, uniform in {2, 3, 4}.
    fn insight_count(&mut self) -> usize;
}

#[derive(Debug, Default)]
pub struct RandomSampler;

impl WorkSampler for RandomSampler {
    fn latency_secs(&mut self) -> f64 {
        rand::thread_rng().gen_range(1.0..4.0)
    }

    fn outcome(&mut self) -> RecordStatus {
        if rand::thread_rng().gen_bool(FAILURE_PROBABILITY) {
            RecordStatus::Failed
        } else {
            RecordStatus::Completed
        }
    }

    fn confidence_percent(&mut self) -> f64 {
        rand::thread_rng().gen_range(70.0..100.0)
    }

    fn insight_count(&mut self) -> usize {
        rand::thread_rng().gen_range(2..=4)
    }
}

/// Everything drawn for one file before the record is assembled.
#[derive(Debug, Clone)]
pub struct SimulatedOutcome {
    pub latency_secs: f64,
    pub status: RecordStatus,
    pub confidence_percent: f64,
    pub insights: Vec<String>,
}

pub fn sample_outcome<S: WorkSampler>(sampler: &mut S) -> SimulatedOutcome {
    let count = sampler.insight_count().min(INSIGHT_CATALOG.len());
    SimulatedOutcome {
        latency_secs: sampler.latency_secs(),
        status: sampler.outcome(),
        confidence_percent: sampler.confidence_percent(),
        insights: INSIGHT_CATALOG[..count]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

pub fn into_record(
    file: &PendingFile,
    flags: ProcessingFlags,
    id: u64,
    outcome: SimulatedOutcome,
    completed_at: DateTime<Utc>,
) -> ProcessingRecord {
    ProcessingRecord {
        id,
        name: file.name.clone(),
        size_bytes: file.size_bytes,
        document_type: document_type(&file.name),
        status: outcome.status,
        processing_time_secs: round2(outcome.latency_secs),
        confidence_percent: round2(outcome.confidence_percent),
        completed_at,
        flags,
        insights: outcome.insights,
    }
}

/// Process a batch strictly one file at a time, in queue order. Each file:
/// draw its outcome, suspend for the simulated latency, then append the
/// finished record under the session lock and report (completed, total).
/// Completion order therefore always equals input order, and so does id
/// assignment. An empty batch is a zero-iteration no-op.
pub async fn run_queue<S, F>(
    files: Vec<PendingFile>,
    flags: ProcessingFlags,
    sampler: &mut S,
    session: &Mutex<SessionState>,
    mut on_complete: F,
) where
    S: WorkSampler,
    F: FnMut(&ProcessingRecord, usize, usize),
{
    let total = files.len();

    for (index, file) in files.into_iter().enumerate() {
        let outcome = sample_outcome(sampler);
        time::sleep(Duration::from_secs_f64(outcome.latency_secs)).await;

        let record = {
            let mut state = session.lock().await;
            let id = state.next_record_id();
            let record = into_record(&file, flags, id, outcome, Utc::now());
            state.store.append(record.clone());
            record
        };

        on_complete(&record, index + 1, total);
    }
}
