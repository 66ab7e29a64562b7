use http::{HeaderMap, Method, StatusCode, Uri};
use pingora::prelude::Session;
use std::time::{Duration, Instant};

/// Per-request state carried through the Pingora hooks.
#[derive(Debug)]
pub struct RequestCtx {
    /// Lifecycle flag to determine if the context has already been hydrated from a session.
    pub hydrated: bool,

    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,

    /// Remote address of the TCP connection, if Pingora knows it.
    pub client: Option<String>,

    pub started: Instant,

    /// Filled in once the response head has been written.
    pub status: Option<StatusCode>,

    /// Body bytes actually written to the client.
    pub body_bytes: u64,
}

impl Default for RequestCtx {
    fn default() -> Self {
        Self::empty()
    }
}

impl RequestCtx {
    pub fn empty() -> Self {
        Self {
            hydrated: false,
            method: Method::GET,
            uri: Uri::from_static("/"),
            headers: HeaderMap::new(),
            client: None,
            started: Instant::now(),
            status: None,
            body_bytes: 0,
        }
    }

    /// Copy what the handlers need out of the session.
    pub fn hydrate_from_session(&mut self, session: &Session) {
        let request_header = session.req_header();
        let client = session.client_addr().map(|addr| addr.to_string());

        self.hydrate(
            request_header.method.clone(),
            request_header.uri.clone(),
            request_header.headers.clone(),
            client,
        );
    }

    pub fn hydrate(
        &mut self,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        client: Option<String>,
    ) {
        self.method = method;
        self.uri = uri;
        self.headers = headers;
        self.client = client;
        self.started = Instant::now();
        self.hydrated = true;
    }

    pub fn is_head(&self) -> bool {
        self.method == Method::HEAD
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
