mod error;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{ConfigOverrides, load_config};
pub use types::{ServerConfig, SiteConfig, StaticFileConfig};
