use crate::conf::{ConfigError, SiteConfig};
use std::path::{Path, PathBuf};

/// Values supplied on the command line. Anything set here wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub listen: Option<String>,
    pub port: Option<u16>,
    pub root: Option<PathBuf>,
    pub threads: Option<usize>,
    pub no_listing: bool,
    pub quiet: bool,
}

impl SiteConfig {
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(listen) = &overrides.listen {
            self.server.listen = listen.clone();
        }

        // --port only swaps the port, the bind address stays as configured.
        if let Some(port) = overrides.port {
            let mut addr = self.listen_addr()?;
            addr.set_port(port);
            self.server.listen = addr.to_string();
        }

        if let Some(root) = &overrides.root {
            self.server.root = root.clone();
        }

        if overrides.threads.is_some() {
            self.server.threads = overrides.threads;
        }

        if overrides.no_listing {
            self.static_files.directory_listing = false;
        }

        if overrides.quiet {
            self.server.banner = false;
        }

        Ok(())
    }
}

pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SiteConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let mut cfg = match path {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };

    //--------------------------------------------------------------------------
    // Command line overrides, then semantic validation
    //--------------------------------------------------------------------------
    cfg.apply_overrides(overrides)?;
    cfg.validate()?;

    tracing::debug!(
        listen = %cfg.server.listen,
        root = %cfg.server.root.display(),
        threads = ?cfg.server.threads,
        directory_listing = cfg.static_files.directory_listing,
        "configuration loaded"
    );

    Ok(cfg)
}
