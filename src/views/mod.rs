pub mod charts;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ProcessingFlags, ProcessingRecord, RecordStatus};
use crate::utils::{format_file_size, round2};

/// One row of the results table, fully formatted for display. `record_id`
/// is the opaque reference the detail button carries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub record_id: u64,
    pub name: String,
    pub document_type: String,
    pub status_label: String,
    pub processing_time: String,
    pub confidence: String,
    pub date_processed: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total: usize,
    /// Percentage in [0, 100], one decimal.
    pub success_rate: f64,
    /// Seconds, two decimals; 0 when the store is empty.
    pub avg_processing_time_secs: f64,
    pub insights_count: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub completed: usize,
    /// Always zero under the append-only model: records enter the store
    /// already terminal. Kept as a category so the status chart and filter
    /// keep their three-way contract.
    pub processing: usize,
    pub failed: usize,
}

/// Detail view behind the eye button: the record plus display formatting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetails {
    pub name: String,
    pub document_type: String,
    pub size_label: String,
    pub status_label: String,
    pub processing_time: String,
    pub confidence: String,
    pub date_processed: String,
    pub flags: ProcessingFlags,
    pub insights: Vec<String>,
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn to_row(record: &ProcessingRecord) -> TableRow {
    TableRow {
        record_id: record.id,
        name: record.name.clone(),
        document_type: record.document_type.clone(),
        status_label: record.status.label().to_string(),
        processing_time: format!("{:.2}s", record.processing_time_secs),
        confidence: format!("{:.2}%", record.confidence_percent),
        date_processed: format_date(record.completed_at),
    }
}

/// Case-insensitive substring search over every rendered column.
fn row_matches(row: &TableRow, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [
        &row.name,
        &row.document_type,
        &row.status_label,
        &row.processing_time,
        &row.confidence,
        &row.date_processed,
    ]
    .iter()
    .any(|column| column.to_lowercase().contains(&needle))
}

/// Project the store into table rows in insertion order, optionally
/// narrowed by a free-text search and an exact status filter (ANDed).
pub fn table_rows(
    records: &[ProcessingRecord],
    search: Option<&str>,
    status: Option<RecordStatus>,
) -> Vec<TableRow> {
    records
        .iter()
        .filter(|record| status.map_or(true, |wanted| record.status == wanted))
        .map(to_row)
        .filter(|row| match search {
            Some(term) if !term.trim().is_empty() => row_matches(row, term.trim()),
            _ => true,
        })
        .collect()
}

pub fn session_stats(records: &[ProcessingRecord]) -> SessionStats {
    let total = records.len();
    if total == 0 {
        return SessionStats {
            total: 0,
            success_rate: 0.0,
            avg_processing_time_secs: 0.0,
            insights_count: 0,
        };
    }

    let completed = records
        .iter()
        .filter(|r| r.status == RecordStatus::Completed)
        .count();
    let success_rate = (completed as f64 / total as f64 * 1000.0).round() / 10.0;

    let time_sum: f64 = records.iter().map(|r| r.processing_time_secs).sum();
    let insights_count = records.iter().map(|r| r.insights.len()).sum();

    SessionStats {
        total,
        success_rate,
        avg_processing_time_secs: round2(time_sum / total as f64),
        insights_count,
    }
}

pub fn status_breakdown(records: &[ProcessingRecord]) -> StatusBreakdown {
    StatusBreakdown {
        completed: records
            .iter()
            .filter(|r| r.status == RecordStatus::Completed)
            .count(),
        processing: 0,
        failed: records
            .iter()
            .filter(|r| r.status == RecordStatus::Failed)
            .count(),
    }
}

pub fn document_details(record: &ProcessingRecord) -> DocumentDetails {
    DocumentDetails {
        name: record.name.clone(),
        document_type: record.document_type.clone(),
        size_label: format_file_size(record.size_bytes),
        status_label: record.status.label().to_string(),
        processing_time: format!("{:.2}s", record.processing_time_secs),
        confidence: format!("{:.2}%", record.confidence_percent),
        date_processed: format_date(record.completed_at),
        flags: record.flags,
        insights: record.insights.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: u64, name: &str, status: RecordStatus, time: f64) -> ProcessingRecord {
        ProcessingRecord {
            id,
            name: name.into(),
            size_bytes: 1536,
            document_type: crate::utils::document_type(name),
            status,
            processing_time_secs: time,
            confidence_percent: 88.5,
            completed_at: Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap(),
            flags: ProcessingFlags::default(),
            insights: vec!["Content matches expected format patterns".into(); 3],
        }
    }

    #[test]
    fn rows_keep_insertion_order_and_formatting() {
        let records = vec![
            record(1, "a.pdf", RecordStatus::Completed, 1.5),
            record(2, "b.txt", RecordStatus::Failed, 3.25),
        ];

        let rows = table_rows(&records, None, None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].record_id, 1);
        assert_eq!(rows[0].processing_time, "1.50s");
        assert_eq!(rows[0].confidence, "88.50%");
        assert_eq!(rows[1].status_label, "Failed");
        assert_eq!(rows[1].date_processed, "2026-08-26 12:00:00");
    }

    #[test]
    fn search_is_case_insensitive_over_all_columns() {
        let records = vec![
            record(1, "Annual-Report.pdf", RecordStatus::Completed, 1.5),
            record(2, "notes.txt", RecordStatus::Failed, 2.0),
        ];

        assert_eq!(table_rows(&records, Some("annual"), None).len(), 1);
        assert_eq!(table_rows(&records, Some("TXT"), None).len(), 1);
        // Matches the formatted status column too.
        assert_eq!(table_rows(&records, Some("fail"), None).len(), 1);
        assert_eq!(table_rows(&records, Some("nothing"), None).len(), 0);
        // Blank search terms are ignored.
        assert_eq!(table_rows(&records, Some("  "), None).len(), 2);
    }

    #[test]
    fn status_filter_ands_with_search() {
        let records = vec![
            record(1, "a.pdf", RecordStatus::Completed, 1.5),
            record(2, "b.pdf", RecordStatus::Failed, 2.0),
            record(3, "c.txt", RecordStatus::Completed, 2.5),
        ];

        let rows = table_rows(&records, Some("pdf"), Some(RecordStatus::Completed));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "a.pdf");
    }

    #[test]
    fn stats_on_empty_store_are_zero() {
        let stats = session_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.avg_processing_time_secs, 0.0);
        assert_eq!(stats.insights_count, 0);
    }

    #[test]
    fn success_rate_is_one_decimal_within_bounds() {
        let records = vec![
            record(1, "a.pdf", RecordStatus::Completed, 1.0),
            record(2, "b.pdf", RecordStatus::Completed, 2.0),
            record(3, "c.pdf", RecordStatus::Failed, 3.0),
        ];

        let stats = session_stats(&records);
        assert_eq!(stats.success_rate, 66.7);
        assert!((0.0..=100.0).contains(&stats.success_rate));
        assert_eq!(stats.avg_processing_time_secs, 2.0);
        assert_eq!(stats.insights_count, 9);
    }

    #[test]
    fn all_completed_means_full_success_rate() {
        let records = vec![
            record(1, "a.pdf", RecordStatus::Completed, 1.0),
            record(2, "b.pdf", RecordStatus::Completed, 2.0),
        ];

        let stats = session_stats(&records);
        assert_eq!(stats.success_rate, 100.0);

        let breakdown = status_breakdown(&records);
        assert_eq!(breakdown.completed, 2);
        assert_eq!(breakdown.processing, 0);
        assert_eq!(breakdown.failed, 0);
    }

    #[test]
    fn details_expose_flags_and_insights() {
        let mut rec = record(5, "contract.docx", RecordStatus::Completed, 2.75);
        rec.flags = ProcessingFlags {
            ocr: true,
            extraction: true,
            summary: false,
        };

        let details = document_details(&rec);
        assert_eq!(details.document_type, "DOCX");
        assert_eq!(details.size_label, "1.5 KB");
        assert!(details.flags.ocr && !details.flags.summary);
        assert_eq!(details.insights.len(), 3);
    }
}
