use reqwest::header::{CACHE_CONTROL, EXPIRES, HeaderMap, HeaderName, PRAGMA};

/// Every response must tell clients not to cache it.
#[track_caller]
pub fn assert_no_cache(headers: &HeaderMap) {
    assert_header(headers, CACHE_CONTROL, "no-cache, no-store, must-revalidate");
    assert_header(headers, EXPIRES, "0");
    assert_header(headers, PRAGMA, "no-cache");
}

#[track_caller]
fn assert_header(headers: &HeaderMap, name: HeaderName, expected: &str) {
    let values: Vec<&str> = headers
        .get_all(&name)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();

    assert_eq!(values, vec![expected], "unexpected {name} in {headers:?}");
}
