use http::{HeaderMap, HeaderName, HeaderValue, header};

pub const CACHE_CONTROL_NO_CACHE: &str = "no-cache, no-store, must-revalidate";
pub const EXPIRES_IMMEDIATELY: &str = "0";
pub const PRAGMA_NO_CACHE: &str = "no-cache";

/// Forbid clients and intermediaries from storing or reusing the response.
///
/// Existing values are replaced, so this must run on the final header map
/// right before it is written.
pub fn apply_no_cache_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_NO_CACHE),
    );
    headers.insert(header::EXPIRES, HeaderValue::from_static(EXPIRES_IMMEDIATELY));
    headers.insert(header::PRAGMA, HeaderValue::from_static(PRAGMA_NO_CACHE));
}

#[derive(Debug, Default)]
pub(crate) struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    /// Inserts (or removes) a header from the header map.
    ///
    /// Converts the provided string value into a `HeaderValue`. If the conversion fails
    /// or results in an empty value, the header is removed from the map. Otherwise,
    /// the header is inserted with the given name and value.
    pub(crate) fn insert(&mut self, header_name: HeaderName, value: &str) {
        let header_value = HeaderValue::from_str(value).unwrap_or(HeaderValue::from_static(""));
        if header_value.is_empty() {
            self.headers.remove(header_name);
        } else {
            self.headers.insert(header_name, header_value);
        }
    }

    pub(crate) fn content_type(&mut self, value: &str) {
        self.insert(header::CONTENT_TYPE, value);
    }

    pub(crate) fn content_length(&mut self, len: u64) {
        self.insert(header::CONTENT_LENGTH, &len.to_string());
    }

    pub(crate) fn last_modified(&mut self, value: &str) {
        self.insert(header::LAST_MODIFIED, value);
    }

    pub(crate) fn location(&mut self, value: &str) {
        self.insert(header::LOCATION, value);
    }

    pub(crate) fn build(self) -> HeaderMap {
        self.headers
    }
}
