use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::info;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::{sync::Mutex, task::JoinHandle};

use crate::models::{ProcessingFlags, ProcessingRecord};
use crate::pipeline::simulator::{run_queue, RandomSampler};
use crate::session::SessionState;

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct ProgressEvent {
    completed: usize,
    total: usize,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct RecordCompletedEvent {
    record: ProcessingRecord,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct RunFinishedEvent {
    processed: usize,
    total_in_store: usize,
}

/// Drives the simulated pipeline for the session. Exactly one run may be
/// active at a time; a run consumes the pending queue and appends one
/// record per file to the results store, emitting progress events the
/// frontend renders in its progress dialog.
#[derive(Clone)]
pub struct PipelineController {
    session: Arc<Mutex<SessionState>>,
    app_handle: AppHandle,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl PipelineController {
    pub fn new(app_handle: AppHandle, session: Arc<Mutex<SessionState>>) -> Self {
        Self {
            session,
            app_handle,
            worker: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn is_running(&self) -> bool {
        self.worker
            .lock()
            .await
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Start processing the pending queue. Returns the batch size.
    /// Fails if a run is already active or nothing is queued; once started,
    /// the run proceeds to completion of the whole batch (no cancellation).
    pub async fn start_run(&self, flags: ProcessingFlags) -> Result<usize> {
        let mut worker = self.worker.lock().await;
        if worker.as_ref().map(|h| !h.is_finished()).unwrap_or(false) {
            return Err(anyhow!("a processing run is already active"));
        }

        let files = {
            let mut state = self.session.lock().await;
            if state.pending.is_empty() {
                return Err(anyhow!("no files queued for processing"));
            }
            // The batch consumes the queue; the file list empties in the UI.
            std::mem::take(&mut state.pending)
        };

        let total = files.len();
        info!("Starting processing run for {} file(s)", total);

        let session = self.session.clone();
        let app_handle = self.app_handle.clone();

        let handle = tokio::spawn(async move {
            let mut sampler = RandomSampler;

            run_queue(files, flags, &mut sampler, &session, |record, completed, total| {
                let _ = app_handle.emit(
                    "processing-record-completed",
                    RecordCompletedEvent {
                        record: record.clone(),
                    },
                );
                let _ = app_handle.emit("processing-progress", ProgressEvent { completed, total });
            })
            .await;

            let total_in_store = session.lock().await.store.count();
            info!(
                "Processing run finished: {} file(s), {} record(s) in store",
                total, total_in_store
            );
            let _ = app_handle.emit(
                "processing-finished",
                RunFinishedEvent {
                    processed: total,
                    total_in_store,
                },
            );
        });

        *worker = Some(handle);
        Ok(total)
    }
}
