mod export;
mod intake;
mod models;
mod pipeline;
mod results;
mod session;
mod utils;
mod views;

use std::sync::Arc;

use intake::commands::{add_files, clear_files, list_pending_files, remove_file};
use pipeline::commands::{is_processing, start_processing};
use pipeline::PipelineController;
use results::commands::{
    export_results, get_dashboard_charts, get_record_details, get_session_stats,
    get_status_breakdown, get_table_rows,
};
use session::SessionState;
use tauri::Manager;
use tokio::sync::Mutex;

pub(crate) struct AppState {
    pub(crate) session: Arc<Mutex<SessionState>>,
    pub(crate) pipeline: PipelineController,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("BT Document Processor starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let session = Arc::new(Mutex::new(SessionState::new()));
            let pipeline = PipelineController::new(app.handle().clone(), session.clone());

            app.manage(AppState { session, pipeline });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            add_files,
            list_pending_files,
            remove_file,
            clear_files,
            start_processing,
            is_processing,
            get_table_rows,
            get_session_stats,
            get_status_breakdown,
            get_dashboard_charts,
            get_record_details,
            export_results,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application")
}
