pub mod handler;
mod render;
mod resolve;
mod response;


pub use handler::{StaticSite, handle_static_request};
pub use render::headers::{
    CACHE_CONTROL_NO_CACHE, EXPIRES_IMMEDIATELY, PRAGMA_NO_CACHE, apply_no_cache_headers,
};
pub use resolve::{ResolveError, ResolvedStatic, resolve_static_path};
pub use response::{ConditionalHeaders, ServeError, StaticBody, StaticResponse};
