use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use tokio::fs;

#[derive(Debug)]
pub enum ServeError {
    NotFound,
    Forbidden,
    Io,
}

pub enum StaticBody {
    Empty,
    /// Useful for small files, listings and error pages.
    Bytes(Bytes),
    /// Useful for large files that require streaming from disk.
    /// Streaming stops after `len` bytes even if the file has grown since.
    File { file: fs::File, len: u64 },
}

pub struct StaticResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: StaticBody,
}

/// Request headers that influence how a file is rendered.
#[derive(Debug, Default)]
pub struct ConditionalHeaders {
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
}

impl ConditionalHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            if_none_match: header_string(headers, http::header::IF_NONE_MATCH),
            if_modified_since: header_string(headers, http::header::IF_MODIFIED_SINCE),
        }
    }
}

fn header_string(headers: &HeaderMap, name: http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
