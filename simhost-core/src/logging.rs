use tracing_subscriber::{EnvFilter, fmt};

/// Target used for the per-request access log events.
pub const ACCESS_LOG_TARGET: &str = "simhost::access";

/// Initialize JSON logging filtered by `RUST_LOG` (defaults to "info").
///
/// Event fields are flattened so access log lines read as flat JSON objects.
pub fn init_normal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}

pub fn init_logging() {
    // tokio-console takes over the global subscriber when requested.
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        init_console_logging();
    } else {
        init_normal_logging();
    }
}

fn init_console_logging() {
    console_subscriber::init();
}
