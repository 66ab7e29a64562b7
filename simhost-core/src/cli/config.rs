use crate::cli::serve::ServeArgs;
use crate::conf::{SiteConfig, load_config};
use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        #[command(flatten)]
        args: ServeArgs,
    },

    /// Print resolved configuration as JSON
    Dump {
        #[command(flatten)]
        args: ServeArgs,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { args } => check(&args),
        ConfigCmd::Dump { args } => dump(&args),
    }
}

pub fn check(args: &ServeArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref(), &args.overrides())?;

    println!("{}", summary(&cfg));

    Ok(())
}

pub fn dump(args: &ServeArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref(), &args.overrides())?;

    dump_json(&cfg)
}

fn summary(cfg: &SiteConfig) -> String {
    let listing = if cfg.static_files.directory_listing {
        "enabled"
    } else {
        "disabled"
    };

    [
        "✔ Config loaded successfully".to_string(),
        format!("✔ listening on {}", cfg.server.listen),
        format!("✔ serving {}", cfg.server.root.display()),
        format!("✔ index files: {}", cfg.static_files.index_files.join(", ")),
        format!("✔ directory listing {listing}"),
    ]
    .join("\n")
}

fn dump_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}
