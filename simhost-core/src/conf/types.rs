use crate::conf::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub server: ServerConfig,
    pub static_files: StaticFileConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:8000"
    pub listen: String,

    /// Directory whose contents are served.
    pub root: PathBuf,

    /// Pingora worker threads. Pingora picks its own default when unset.
    pub threads: Option<usize>,

    /// Print the startup line on stdout.
    pub banner: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            root: PathBuf::from("."),
            threads: None,
            banner: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticFileConfig {
    /// Tried in order when a directory is requested.
    pub index_files: Vec<String>,

    /// Render an HTML listing for directories without an index file.
    pub directory_listing: bool,

    /// Files up to this size are buffered; larger ones are streamed.
    pub small_file_threshold: u64,

    /// Files above this size are refused with 403.
    pub max_file_size: Option<u64>,
}

impl Default for StaticFileConfig {
    fn default() -> Self {
        Self {
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            directory_listing: true,
            small_file_threshold: 256 * 1024, // 256 KiB
            max_file_size: None,
        }
    }
}

impl SiteConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;

        let root = &self.server.root;
        if !root.exists() {
            return Err(ConfigError::RootNotFound { path: root.clone() });
        }
        if !root.is_dir() {
            return Err(ConfigError::RootNotDirectory { path: root.clone() });
        }

        for name in &self.static_files.index_files {
            if !is_plain_file_name(name) {
                return Err(ConfigError::InvalidIndexFile { name: name.clone() });
            }
        }

        if self.server.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }

        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .listen
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListen {
                listen: self.server.listen.clone(),
            })
    }

    /// Address a local browser should open, e.g. `http://localhost:8000`.
    pub fn public_url(&self) -> Result<String, ConfigError> {
        let port = self.listen_addr()?.port();
        Ok(format!("http://localhost:{port}"))
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::parse("<inline>", e))
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
