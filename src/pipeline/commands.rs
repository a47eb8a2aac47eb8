use tauri::State;

use crate::models::ProcessingFlags;
use crate::AppState;

/// Kick off a run over the current pending queue with the batch's options.
/// The frontend confirms with the user before calling this; rejection of an
/// empty queue or a concurrent run comes back as the error string.
#[tauri::command]
pub async fn start_processing(
    state: State<'_, AppState>,
    flags: ProcessingFlags,
) -> Result<usize, String> {
    state
        .pipeline
        .start_run(flags)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn is_processing(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.pipeline.is_running().await)
}
