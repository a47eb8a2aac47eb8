use serde::Serialize;
use tauri::State;

use crate::export;
use crate::models::RecordStatus;
use crate::views::{
    self,
    charts::{dashboard_charts, DashboardCharts},
    DocumentDetails, SessionStats, StatusBreakdown, TableRow,
};
use crate::AppState;

#[tauri::command]
pub async fn get_table_rows(
    state: State<'_, AppState>,
    search: Option<String>,
    status: Option<RecordStatus>,
) -> Result<Vec<TableRow>, String> {
    let session = state.session.lock().await;
    Ok(views::table_rows(
        session.store.all(),
        search.as_deref(),
        status,
    ))
}

#[tauri::command]
pub async fn get_session_stats(state: State<'_, AppState>) -> Result<SessionStats, String> {
    let session = state.session.lock().await;
    Ok(views::session_stats(session.store.all()))
}

#[tauri::command]
pub async fn get_status_breakdown(state: State<'_, AppState>) -> Result<StatusBreakdown, String> {
    let session = state.session.lock().await;
    Ok(views::status_breakdown(session.store.all()))
}

#[tauri::command]
pub async fn get_dashboard_charts(state: State<'_, AppState>) -> Result<DashboardCharts, String> {
    let session = state.session.lock().await;
    Ok(dashboard_charts(views::status_breakdown(session.store.all())))
}

#[tauri::command]
pub async fn get_record_details(
    state: State<'_, AppState>,
    record_id: u64,
) -> Result<Option<DocumentDetails>, String> {
    let session = state.session.lock().await;
    Ok(session.store.find(record_id).map(views::document_details))
}

/// What the frontend needs to trigger a file save of the results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

/// Export the full store as CSV. Blocked on an empty store here, at the
/// policy layer; the encoder itself is fine with zero records.
#[tauri::command]
pub async fn export_results(state: State<'_, AppState>) -> Result<ExportPayload, String> {
    let session = state.session.lock().await;
    if session.store.count() == 0 {
        return Err("no results to export".to_string());
    }

    Ok(ExportPayload {
        file_name: export::EXPORT_FILE_NAME,
        mime_type: export::EXPORT_MIME,
        content: export::encode(session.store.all()),
    })
}
