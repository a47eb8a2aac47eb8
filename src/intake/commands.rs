use serde::Serialize;
use tauri::State;

use crate::models::{FileCandidate, IntakeReport};
use crate::utils::format_file_size;
use crate::AppState;

/// One entry of the pending-file list as the UI renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingFileView {
    pub name: String,
    pub size_bytes: u64,
    pub size_label: String,
}

#[tauri::command]
pub async fn add_files(
    state: State<'_, AppState>,
    candidates: Vec<FileCandidate>,
) -> Result<IntakeReport, String> {
    let mut session = state.session.lock().await;
    Ok(super::add_files(&mut session.pending, candidates))
}

#[tauri::command]
pub async fn list_pending_files(
    state: State<'_, AppState>,
) -> Result<Vec<PendingFileView>, String> {
    let session = state.session.lock().await;
    Ok(session
        .pending
        .iter()
        .map(|file| PendingFileView {
            name: file.name.clone(),
            size_bytes: file.size_bytes,
            size_label: format_file_size(file.size_bytes),
        })
        .collect())
}

#[tauri::command]
pub async fn remove_file(state: State<'_, AppState>, index: usize) -> Result<(), String> {
    let mut session = state.session.lock().await;
    super::remove_at(&mut session.pending, index);
    Ok(())
}

/// Clears the queue; the confirmation dialog is the frontend's business.
/// Returns how many files were removed for the acknowledgement message.
#[tauri::command]
pub async fn clear_files(state: State<'_, AppState>) -> Result<usize, String> {
    let mut session = state.session.lock().await;
    Ok(super::clear(&mut session.pending))
}
