use chrono::{DateTime, Utc};

use crate::models::ProcessingRecord;

pub const EXPORT_FILE_NAME: &str = "bt-document-processor-results.csv";
pub const EXPORT_MIME: &str = "text/csv";

const HEADERS: [&str; 6] = [
    "Document Name",
    "Type",
    "Status",
    "Processing Time (s)",
    "Confidence (%)",
    "Date Processed",
];

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Serialize the store to delimited text: a plain comma-joined header line,
/// then one line per record in store order with every field double-quoted.
/// Rows join with a single newline and there is no trailing newline; an
/// empty store still yields the header-only document.
pub fn encode(records: &[ProcessingRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.join(","));

    for record in records {
        let fields = [
            record.name.clone(),
            record.document_type.clone(),
            record.status.as_str().to_string(),
            format!("{:.2}", record.processing_time_secs),
            format!("{:.2}", record.confidence_percent),
            format_date(record.completed_at),
        ];
        let row: Vec<String> = fields.iter().map(|field| format!("\"{field}\"")).collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}
