use std::time::SystemTime;

use httpdate::parse_http_date;

use crate::static_files::ConditionalHeaders;

/// Decide whether a `304 Not Modified` can be sent instead of the file.
///
/// No entity tags are issued, so `If-None-Match` can never match. Its presence
/// still disables `If-Modified-Since`, which only applies on its own.
pub(crate) fn is_not_modified(
    conditional: &ConditionalHeaders,
    file_modified: Option<SystemTime>,
) -> bool {
    if conditional.if_none_match.is_some() {
        return false;
    }

    match conditional.if_modified_since.as_deref() {
        Some(ims) => !modified_since(file_modified, ims),
        None => false,
    }
}

/// Check if the file has been modified since the given date.
pub(crate) fn modified_since(file_modified: Option<SystemTime>, if_modified_since: &str) -> bool {
    let file_time = match file_modified {
        Some(t) => t,
        None => return true, // Unknown mtime, assume modified
    };

    let since_time = match parse_http_date(if_modified_since) {
        Ok(t) => t,
        Err(_) => return true, // Invalid header, assume modified
    };

    // HTTP dates have 1-second resolution, so sub-second differences
    // count as NOT modified.
    match file_time.duration_since(since_time) {
        Ok(delta) => delta.as_secs() >= 1,
        Err(_) => false, // file_time <= since_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpdate::fmt_http_date;
    use std::time::Duration;

    fn headers(inm: Option<&str>, ims: Option<&str>) -> ConditionalHeaders {
        ConditionalHeaders {
            if_none_match: inm.map(str::to_string),
            if_modified_since: ims.map(str::to_string),
        }
    }

    #[test]
    fn same_second_is_not_modified() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_400);
        let header = fmt_http_date(mtime);

        assert!(!modified_since(Some(mtime), &header));
        assert!(is_not_modified(&headers(None, Some(&header)), Some(mtime)));
    }

    #[test]
    fn newer_file_is_modified() {
        let since = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mtime = since + Duration::from_secs(5);

        assert!(modified_since(Some(mtime), &fmt_http_date(since)));
    }

    #[test]
    fn garbage_date_counts_as_modified() {
        assert!(modified_since(Some(SystemTime::now()), "yesterday-ish"));
    }

    #[test]
    fn unknown_mtime_counts_as_modified() {
        assert!(modified_since(None, "Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn if_none_match_disables_date_validation() {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let header = fmt_http_date(mtime);

        assert!(!is_not_modified(
            &headers(Some("\"abc\""), Some(&header)),
            Some(mtime)
        ));
    }

    #[test]
    fn no_conditional_headers_means_full_response() {
        assert!(!is_not_modified(&headers(None, None), Some(SystemTime::now())));
    }
}
