use crate::static_files::render::directory::escape_html;
use crate::static_files::render::headers::HeaderBuilder;
use crate::static_files::{StaticBody, StaticResponse};
use bytes::Bytes;
use http::StatusCode;

/// Small HTML page describing an error status.
pub fn render_error(status: StatusCode, message: &str) -> StaticResponse {
    let reason = status.canonical_reason().unwrap_or("Unknown");

    let html = format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Error response</title>\n\
         </head>\n\
         <body>\n\
         <h1>Error response</h1>\n\
         <p>Error code: {code}</p>\n\
         <p>Message: {message}.</p>\n\
         <p>Error code explanation: {code} - {reason}.</p>\n\
         </body>\n\
         </html>\n",
        code = status.as_u16(),
        message = escape_html(message),
        reason = reason,
    );

    let body: Bytes = html.into();

    let mut headers = HeaderBuilder::default();
    headers.content_type("text/html; charset=utf-8");
    headers.content_length(body.len() as u64);

    StaticResponse {
        status,
        headers: headers.build(),
        body: StaticBody::Bytes(body),
    }
}

/// `301 Moved Permanently` pointing at `location`.
pub fn render_redirect(location: &str) -> StaticResponse {
    let mut headers = HeaderBuilder::default();
    headers.location(location);
    headers.content_length(0);

    StaticResponse {
        status: StatusCode::MOVED_PERMANENTLY,
        headers: headers.build(),
        body: StaticBody::Empty,
    }
}
