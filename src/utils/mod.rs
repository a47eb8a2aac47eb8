/// Round to two decimal places, the precision used for processing times
/// and confidence scores throughout the app.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lowercase extension of a file name, without the dot.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Document type shown in the results table: the uppercased extension.
pub fn document_type(name: &str) -> String {
    file_extension(name)
        .map(|ext| ext.to_ascii_uppercase())
        .unwrap_or_default()
}

/// Human-readable file size for the file list and detail views,
/// e.g. `1.5 KB`, `12 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);

    // Trim trailing zeros so 2.00 renders as "2", matching the demo UI.
    let rounded = round2(scaled);
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    format!("{} {}", text, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_truncates_to_cents() {
        assert_eq!(round2(2.345), 2.35);
        assert_eq!(round2(70.0), 70.0);
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("Report.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("notes.txt").as_deref(), Some("txt"));
        assert_eq!(file_extension("noextension"), None);
        assert_eq!(file_extension(".hidden"), None);
    }

    #[test]
    fn document_type_uppercases() {
        assert_eq!(document_type("contract.docx"), "DOCX");
        assert_eq!(document_type("plain"), "");
    }

    #[test]
    fn file_sizes_format_like_the_demo() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50 MB");
    }
}
