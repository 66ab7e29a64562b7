use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Validation
    #[error("invalid listen address '{listen}'")]
    InvalidListen { listen: String },

    #[error("document root {path} does not exist")]
    RootNotFound { path: PathBuf },

    #[error("document root {path} is not a directory")]
    RootNotDirectory { path: PathBuf },

    #[error("index file '{name}' must be a plain file name")]
    InvalidIndexFile { name: String },

    #[error("worker thread count must be greater than zero")]
    ZeroThreads,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
