//! Patient id extraction from request paths.
//!
//! Ids are positional: the lookup endpoint takes the last path segment and
//! the ingest endpoint the one before it. Paths are percent-decoded before
//! they are split. Segments are not validated here.

/// Percent-decode a request path; invalid UTF-8 becomes U+FFFD
pub fn decode_path(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}

/// Patient id for a lookup request: the last path segment, possibly empty
pub fn lookup_patient_id(path: &str) -> &str {
    path.trim_matches('/').rsplit('/').next().unwrap_or_default()
}

/// Patient id for an ingest request: the second-to-last path segment,
/// `None` when the path has fewer than two segments
pub fn ingest_patient_id(path: &str) -> Option<&str> {
    let segments = segments(path);
    segments.len().checked_sub(2).map(|index| segments[index])
}
