pub mod setup;
mod shutdown;

pub use setup::{build_pingora_server, run};
pub use shutdown::{INTERRUPT_NOTICE, TerminateSignalWatch, install_interrupt_handler};
