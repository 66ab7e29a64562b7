pub mod cli;
pub mod conf;
pub mod ctx;
pub mod logging;
mod proxy;
pub mod server;
pub mod static_files;
