use crate::conf::{ConfigOverrides, load_config};
use crate::server;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bind address, e.g. 127.0.0.1:8000
    #[arg(long)]
    pub listen: Option<String>,

    /// Port to listen on (keeps the bind address)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Directory to serve (defaults to the current directory)
    #[arg(long, short)]
    pub root: Option<PathBuf>,

    /// Worker threads
    #[arg(long)]
    pub threads: Option<usize>,

    /// Answer 403 for directories without an index file
    #[arg(long)]
    pub no_listing: bool,

    /// Do not print the startup line
    #[arg(long, short)]
    pub quiet: bool,
}

impl ServeArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            listen: self.listen.clone(),
            port: self.port,
            root: self.root.clone(),
            threads: self.threads,
            no_listing: self.no_listing,
            quiet: self.quiet,
        }
    }
}

pub fn serve(args: ServeArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref(), &args.overrides())?;
    server::run(cfg)
}
