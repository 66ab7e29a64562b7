use std::path::Path;

use crate::static_files::render::error::render_error;
use crate::static_files::render::headers::HeaderBuilder;
use crate::static_files::{StaticBody, StaticResponse};
use bytes::Bytes;
use http::StatusCode;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

struct ListingEntry {
    name: String,
    is_dir: bool,
    is_symlink: bool,
}

/// Render a basic HTML directory listing.
/// Assumes:
/// - `dir` is already canonicalized and validated
/// - traversal has already been prevented
/// - caller has confirmed directory_listing is enabled
///
/// `display_path` is the decoded request path used for the title.
pub fn render_directory(dir: &Path, display_path: &str) -> StaticResponse {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "directory not readable");
            return render_error(StatusCode::FORBIDDEN, "No permission to list directory");
        }
    };

    let mut entries: Vec<ListingEntry> = read_dir
        .filter_map(|e| e.ok())
        .map(|entry| ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            // Follows symlinks, so a link to a directory is navigable.
            is_dir: entry.path().is_dir(),
            is_symlink: entry.file_type().map(|t| t.is_symlink()).unwrap_or(false),
        })
        .collect();

    entries.sort_by_cached_key(|e| e.name.to_lowercase());

    let title = format!("Directory listing for {}", escape_html(display_path));

    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str("<hr>\n<ul>\n");

    for entry in &entries {
        let mut href = escape_href(&entry.name);
        let mut label = escape_html(&entry.name);

        if entry.is_dir {
            href.push('/');
            label.push('/');
        }
        if entry.is_symlink {
            // Links are marked in the label only, the href still resolves.
            label = format!("{}@", escape_html(&entry.name));
        }

        html.push_str(&format!("<li><a href=\"{href}\">{label}</a></li>\n"));
    }

    html.push_str("</ul>\n<hr>\n");
    html.push_str("</body>\n</html>\n");

    let body: Bytes = html.into();

    let mut headers = HeaderBuilder::default();
    headers.content_type("text/html; charset=utf-8");
    headers.content_length(body.len() as u64);

    StaticResponse {
        status: StatusCode::OK,
        headers: headers.build(),
        body: StaticBody::Bytes(body),
    }
}

/// Minimal HTML escaping (sufficient for filenames and paths)
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a path segment for use in an HTML href attribute.
/// This is URL encoding, NOT HTML escaping.
fn escape_href(input: &str) -> String {
    const SEGMENT: &AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'"')
        .add(b'<')
        .add(b'>')
        .add(b'`')
        .add(b'#')
        .add(b'?')
        .add(b'%')
        .add(b'&')
        .add(b'\'');

    utf8_percent_encode(input, SEGMENT).to_string()
}
