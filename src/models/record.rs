use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RecordStatus {
    Completed,
    Failed,
}

impl RecordStatus {
    /// Lowercase wire form, as stored and exported.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Completed => "completed",
            RecordStatus::Failed => "failed",
        }
    }

    /// Capitalized form for table badges and the status filter.
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Completed => "Completed",
            RecordStatus::Failed => "Failed",
        }
    }
}

/// Processing options chosen for a batch; recorded on every record of that
/// batch but never acted upon (the pipeline is simulated).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingFlags {
    pub ocr: bool,
    pub extraction: bool,
    pub summary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingRecord {
    /// Session-wide monotonically increasing id, assigned at completion.
    pub id: u64,
    pub name: String,
    pub size_bytes: u64,
    /// Uppercased file extension, e.g. "PDF".
    pub document_type: String,
    pub status: RecordStatus,
    /// Simulated work duration, seconds, two-decimal precision.
    pub processing_time_secs: f64,
    /// In [70.0, 100.0), two-decimal precision.
    pub confidence_percent: f64,
    pub completed_at: DateTime<Utc>,
    pub flags: ProcessingFlags,
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_and_label_forms() {
        assert_eq!(RecordStatus::Completed.as_str(), "completed");
        assert_eq!(RecordStatus::Failed.label(), "Failed");
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = ProcessingRecord {
            id: 1,
            name: "report.pdf".into(),
            size_bytes: 2048,
            document_type: "PDF".into(),
            status: RecordStatus::Completed,
            processing_time_secs: 2.41,
            confidence_percent: 88.12,
            completed_at: Utc::now(),
            flags: ProcessingFlags::default(),
            insights: vec!["Key entities identified with high confidence".into()],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["documentType"], "PDF");
        assert_eq!(value["status"], "completed");
        assert_eq!(value["processingTimeSecs"], 2.41);
        assert!(value["flags"]["ocr"].is_boolean());
    }
}
