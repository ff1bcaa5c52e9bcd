//! Filesystem-safe names derived from free-text labels

/// Make a label safe for use in a file name
///
/// Comma-space, colon-space, and the remaining commas, colons and spaces all
/// collapse to single underscores, so `"China, P.R.: Mainland"` becomes
/// `"China_P.R._Mainland"`.
pub fn safe_filename(label: &str) -> String {
    label
        .replace(", ", "_")
        .replace(": ", "_")
        .replace([',', ':', ' '], "_")
}
