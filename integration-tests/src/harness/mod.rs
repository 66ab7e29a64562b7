mod assertions;
pub mod server;
pub mod tracing;

pub use assertions::assert_no_cache;
pub use server::{TestServer, fixtures_root};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing, wait_for_event};
