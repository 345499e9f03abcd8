//! Raw file responses.

use bytes::Bytes;

/// A file fetched through the pipeline (exports, attachments).
#[derive(Debug, Clone)]
pub struct Download {
    /// File name from `Content-Disposition`, if the server sent one.
    pub file_name: Option<String>,
    /// `Content-Type` of the response.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes: Bytes,
}

/// Extract the file name from a `Content-Disposition` header value.
///
/// Prefers the RFC 5987 `filename*=UTF-8''...` form, which the backend uses
/// for Chinese file names, over the plain `filename=` parameter.
pub(crate) fn file_name_from_disposition(value: &str) -> Option<String> {
    let mut plain = None;
    for part in value.split(';').map(str::trim) {
        if let Some(encoded) = part.strip_prefix("filename*=") {
            let encoded = encoded
                .split_once("''")
                .map(|(_, rest)| rest)
                .unwrap_or(encoded);
            return Some(percent_decode(encoded.trim_matches('"')));
        }
        if let Some(name) = part.strip_prefix("filename=") {
            plain = Some(name.trim_matches('"').to_string());
        }
    }
    plain
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
