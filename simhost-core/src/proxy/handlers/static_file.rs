use crate::ctx::RequestCtx;
use crate::static_files::{
    ConditionalHeaders, StaticBody, StaticResponse, StaticSite, apply_no_cache_headers,
    handle_static_request,
};
use bytes::BytesMut;
use http::StatusCode;
use pingora::prelude::Session;
use pingora::{Custom, Error};
use pingora_http::ResponseHeader;
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 32 * 1024;

pub(crate) struct StaticFileHandler;

impl StaticFileHandler {
    /// Answer the request from the document root. Always ends the response.
    pub(crate) async fn handle(
        &self,
        session: &mut Session,
        ctx: &mut RequestCtx,
        site: &StaticSite,
    ) -> pingora::Result<bool> {
        let conditional = ConditionalHeaders::from_headers(&ctx.headers);

        let StaticResponse {
            status,
            mut headers,
            body,
        } = handle_static_request(site, &ctx.method, &ctx.uri, &conditional).await;

        // Every response leaves through here, errors and redirects included.
        apply_no_cache_headers(&mut headers);

        let mut resp = ResponseHeader::build(status, Some(headers.len()))?;
        for (name, value) in headers.iter() {
            resp.insert_header(name.clone(), value.clone())?;
        }

        // Write headers (not end-of-stream yet)
        session.write_response_header(Box::new(resp), false).await?;
        ctx.status = Some(status);

        if ctx.is_head() || status == StatusCode::NOT_MODIFIED {
            // Short-circuit the body write step.
            session.write_response_body(None, true).await?;
            return Ok(true);
        }

        match body {
            StaticBody::Empty => {
                session.write_response_body(None, true).await?;
            }

            StaticBody::Bytes(bytes) => {
                ctx.body_bytes += bytes.len() as u64;
                session.write_response_body(Some(bytes), true).await?;
            }

            StaticBody::File { mut file, len } => {
                let mut remaining = len;
                let mut buf = BytesMut::with_capacity(CHUNK_SIZE);

                while remaining > 0 {
                    let to_read = std::cmp::min(CHUNK_SIZE as u64, remaining) as usize;
                    buf.resize(to_read, 0);

                    let n = file.read(&mut buf[..]).await.map_err(|err| {
                        tracing::warn!(path = %ctx.uri.path(), error = %err, "static file read error");
                        Error::new(Custom("static file read error"))
                    })?;

                    if n == 0 {
                        // Truncated underneath us; the client sees a short body.
                        break;
                    }

                    remaining -= n as u64;
                    buf.truncate(n);
                    ctx.body_bytes += n as u64;

                    session
                        .write_response_body(Some(buf.split().freeze()), false)
                        .await?;
                }

                session.write_response_body(None, true).await?;
            }
        }

        Ok(true)
    }
}
