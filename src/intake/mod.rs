pub mod commands;

use log::info;

use crate::models::{FileCandidate, IntakeReport, PendingFile, RejectReason, Rejection};

pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

const VALID_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];
const VALID_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Validate candidates and append the accepted ones to the pending queue,
/// in input order. Each candidate is evaluated independently; the first
/// violated check (type, then size, then duplicate) decides its rejection.
pub fn add_files(queue: &mut Vec<PendingFile>, candidates: Vec<FileCandidate>) -> IntakeReport {
    let mut report = IntakeReport::default();

    for candidate in candidates {
        if let Some(reason) = validate(queue, &candidate) {
            info!("Rejected {}: {:?}", candidate.name, reason);
            report.rejections.push(Rejection {
                name: candidate.name,
                reason,
            });
            continue;
        }

        queue.push(PendingFile {
            name: candidate.name,
            size_bytes: candidate.size_bytes,
            mime_hint: candidate.mime_type,
        });
        report.accepted += 1;
    }

    report
}

fn validate(queue: &[PendingFile], candidate: &FileCandidate) -> Option<RejectReason> {
    if !has_supported_type(candidate) {
        return Some(RejectReason::UnsupportedType);
    }

    if candidate.size_bytes > MAX_FILE_SIZE_BYTES {
        return Some(RejectReason::TooLarge);
    }

    if queue
        .iter()
        .any(|file| file.same_identity(&candidate.name, candidate.size_bytes))
    {
        return Some(RejectReason::Duplicate);
    }

    None
}

/// A candidate passes on either its mime type or its extension, the same
/// leniency the file picker and the drop zone need respectively.
fn has_supported_type(candidate: &FileCandidate) -> bool {
    if VALID_MIME_TYPES.contains(&candidate.mime_type.as_str()) {
        return true;
    }

    match crate::utils::file_extension(&candidate.name) {
        Some(ext) => VALID_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Remove one pending file by position. Out-of-range indices are a no-op.
pub fn remove_at(queue: &mut Vec<PendingFile>, index: usize) {
    if index < queue.len() {
        queue.remove(index);
    }
}

/// Empty the queue unconditionally; returns how many files were removed so
/// the caller can phrase its acknowledgement. Confirmation policy belongs
/// to the caller, not here.
pub fn clear(queue: &mut Vec<PendingFile>) -> usize {
    let removed = queue.len();
    queue.clear();
    removed
}
