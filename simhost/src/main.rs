use clap::{Parser, Subcommand};
use simhost_core::cli;
use simhost_core::cli::serve::ServeArgs;
use simhost_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "simhost",
    version,
    about = "simhost: no-cache static file server for local previews",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the document root (default)
    Serve(ServeArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let parsed = Cli::parse();

    init_logging();

    let result = match parsed.command {
        Some(Command::Serve(args)) => cli::serve::serve(args),
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        None => cli::serve::serve(parsed.serve),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "simhost failed");
        eprintln!("simhost: {e:#}");
        std::process::exit(1);
    }
}
