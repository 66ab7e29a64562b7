use crate::ctx::RequestCtx;
use crate::logging::ACCESS_LOG_TARGET;
use crate::proxy::handlers::StaticFileHandler;
use crate::static_files::StaticSite;
use async_trait::async_trait;
use pingora::prelude::*;
use std::sync::Arc;

/// SiteGateway answers every request from the document root.
/// Pingora's proxy hooks are used as a plain HTTP server; no upstream is ever contacted.
///
/// Hook order as used here:
///
/// 1. new_ctx()
///    - Allocate empty RequestCtx
///
/// 2. request_filter()
///    - Hydrate ctx from Session
///    - Resolve and write the static response
///    - Always returns `true`, so the proxy phases never run
///
/// 3. logging()   /// ALWAYS LAST
///    - Access log line
///    - Surface transport errors
pub struct SiteGateway {
    site: Arc<StaticSite>,

    // Handler(s)
    static_file_handler: StaticFileHandler,
}

impl SiteGateway {
    pub fn new(site: Arc<StaticSite>) -> Self {
        Self {
            site,
            static_file_handler: StaticFileHandler,
        }
    }
}

#[async_trait]
impl ProxyHttp for SiteGateway {
    type CTX = RequestCtx;

    fn new_ctx(&self) -> Self::CTX {
        RequestCtx::empty()
    }

    /// Unreachable in practice: request_filter always responds.
    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> Result<Box<HttpPeer>> {
        Err(Error::new(Custom("static site has no upstream")))
    }

    async fn request_filter(&self, session: &mut Session, ctx: &mut Self::CTX) -> Result<bool> {
        ctx.hydrate_from_session(session);

        self.static_file_handler
            .handle(session, ctx, &self.site)
            .await
    }

    async fn logging(&self, _session: &mut Session, e: Option<&Error>, ctx: &mut Self::CTX)
    where
        Self::CTX: Send + Sync,
    {
        if let Some(err) = e {
            tracing::warn!(
                path = %ctx.uri.path(),
                error = %err,
                "request ended with error"
            );
        }

        // Requests rejected by Pingora before request_filter carry no data.
        if !ctx.hydrated {
            return;
        }

        tracing::info!(
            target: ACCESS_LOG_TARGET,
            client = ctx.client.as_deref().unwrap_or("-"),
            method = %ctx.method,
            path = %ctx.uri.path(),
            query = ctx.uri.query().unwrap_or(""),
            status = ctx.status.map(|s| s.as_u16()).unwrap_or(0),
            bytes = ctx.body_bytes,
            elapsed_ms = ctx.elapsed().as_millis() as u64,
            "request served"
        );
    }
}
