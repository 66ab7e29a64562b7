use std::path::PathBuf;

use http::{Method, StatusCode, Uri};

use crate::conf::{SiteConfig, StaticFileConfig};
use crate::static_files::render::{render_directory, render_error, render_file, render_redirect};
use crate::static_files::resolve::{ResolveError, ResolvedStatic, resolve_static_path};
use crate::static_files::{ConditionalHeaders, ServeError, StaticResponse};

/// Everything needed to answer a request from the document root.
#[derive(Debug, Clone)]
pub struct StaticSite {
    pub root: PathBuf,
    pub config: StaticFileConfig,
}

impl StaticSite {
    pub fn new(root: impl Into<PathBuf>, config: StaticFileConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self::new(cfg.server.root.clone(), cfg.static_files.clone())
    }
}

pub async fn handle_static_request(
    site: &StaticSite,
    method: &Method,
    uri: &Uri,
    conditional: &ConditionalHeaders,
) -> StaticResponse {
    if method != Method::GET && method != Method::HEAD {
        return render_error(
            StatusCode::NOT_IMPLEMENTED,
            &format!("Unsupported method ('{method}')"),
        );
    }

    let request_path = uri.path();

    let resolved = match resolve_static_path(&site.root, request_path, &site.config.index_files)
    {
        Ok(resolved) => resolved,
        Err(e) => {
            let (status, message) = map_resolve_error(e);
            return render_error(status, message);
        }
    };

    match resolved {
        ResolvedStatic::File(path) => render_file(path, conditional, &site.config)
            .await
            .unwrap_or_else(|e| {
                let (status, message) = map_serve_error(e);
                render_error(status, message)
            }),

        ResolvedStatic::Directory(dir) => {
            if !site.config.directory_listing {
                return render_error(StatusCode::FORBIDDEN, "Directory listing is disabled");
            }

            let display_path = percent_encoding::percent_decode_str(request_path).decode_utf8_lossy();
            render_directory(&dir, &display_path)
        }

        ResolvedStatic::Redirect(path) => match uri.query() {
            Some(query) => render_redirect(&format!("{path}?{query}")),
            None => render_redirect(&path),
        },
    }
}

fn map_resolve_error(err: ResolveError) -> (StatusCode, &'static str) {
    match err {
        ResolveError::NotFound => (StatusCode::NOT_FOUND, "File not found"),
        ResolveError::Forbidden => (StatusCode::FORBIDDEN, "Path is outside the document root"),
        ResolveError::BadPath => (StatusCode::BAD_REQUEST, "Bad request path"),
    }
}

fn map_serve_error(err: ServeError) -> (StatusCode, &'static str) {
    match err {
        ServeError::NotFound => (StatusCode::NOT_FOUND, "File not found"),
        ServeError::Forbidden => (StatusCode::FORBIDDEN, "File is not accessible"),
        ServeError::Io => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file"),
    }
}
