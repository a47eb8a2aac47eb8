use serde::{Deserialize, Serialize};

/// A file handed over by the file picker or drop zone, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
    /// Mime type as reported by the webview; may be empty for drag-and-drop.
    #[serde(default)]
    pub mime_type: String,
}

/// A validated file waiting in the upload queue.
/// Identity within the queue is the (name, size_bytes) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_hint: String,
}

impl PendingFile {
    pub fn same_identity(&self, name: &str, size_bytes: u64) -> bool {
        self.name == name && self.size_bytes == size_bytes
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    UnsupportedType,
    TooLarge,
    Duplicate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub name: String,
    pub reason: RejectReason,
}

/// Outcome of one `add_files` call, for caller-side notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeReport {
    pub accepted: usize,
    pub rejections: Vec<Rejection>,
}

impl IntakeReport {
    pub fn rejected(&self) -> usize {
        self.rejections.len()
    }
}
