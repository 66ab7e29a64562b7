use std::path::PathBuf;

use crate::conf::StaticFileConfig;
use crate::static_files::render::conditional::is_not_modified;
use crate::static_files::render::headers::HeaderBuilder;
use crate::static_files::{ConditionalHeaders, ServeError, StaticBody, StaticResponse};
use bytes::Bytes;
use http::StatusCode;
use httpdate::fmt_http_date;
use tokio::fs;
use tokio::io::AsyncReadExt;

pub async fn render_file(
    path: PathBuf,
    conditional: &ConditionalHeaders,
    config: &StaticFileConfig,
) -> Result<StaticResponse, ServeError> {
    let metadata = fs::metadata(&path)
        .await
        .map_err(|_| ServeError::NotFound)?;

    if !metadata.is_file() {
        return Err(ServeError::NotFound);
    }

    if config.max_file_size.is_some_and(|max| metadata.len() > max) {
        return Err(ServeError::Forbidden);
    }

    let modified = metadata.modified().ok();

    let mut headers = HeaderBuilder::default();
    if let Some(modified) = modified {
        headers.last_modified(&fmt_http_date(modified));
    }

    // 304 carries no representation headers.
    if is_not_modified(conditional, modified) {
        return Ok(StaticResponse {
            status: StatusCode::NOT_MODIFIED,
            headers: headers.build(),
            body: StaticBody::Empty,
        });
    }

    // Guess MIME type to set the Content-Type header.
    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    headers.content_type(mime.as_ref());

    // Grab a file handle.
    let mut file = fs::File::open(&path)
        .await
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ServeError::NotFound,
            std::io::ErrorKind::PermissionDenied => ServeError::Forbidden,
            _ => ServeError::Io,
        })?;

    if metadata.len() <= config.small_file_threshold {
        let mut buf = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut buf)
            .await
            .map_err(|_| ServeError::Io)?;

        headers.content_length(buf.len() as u64);

        return Ok(StaticResponse {
            status: StatusCode::OK,
            headers: headers.build(),
            body: StaticBody::Bytes(Bytes::from(buf)),
        });
    }

    headers.content_length(metadata.len());

    Ok(StaticResponse {
        status: StatusCode::OK,
        headers: headers.build(),
        body: StaticBody::File {
            file,
            len: metadata.len(),
        },
    })
}
