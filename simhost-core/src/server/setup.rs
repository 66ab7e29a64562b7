use crate::conf::SiteConfig;
use crate::proxy::SiteGateway;
use crate::server::{TerminateSignalWatch, install_interrupt_handler};
use crate::static_files::StaticSite;
use anyhow::{Error, Result, anyhow};
use pingora::prelude::*;
use pingora::server::{RunArgs, Server};
use pingora::server::configuration::ServerConf;
use std::sync::Arc;

/// Run the Pingora server with the given configuration. Never returns on success.
pub fn run(config: SiteConfig) -> Result<()> {
    let url = config.public_url()?;
    let server = build_pingora_server(&config)?;

    install_interrupt_handler()?;

    if config.server.banner {
        println!(">> Running simulation on {url}");
    }

    tracing::info!(
        listen = %config.server.listen,
        root = %config.server.root.display(),
        threads = ?config.server.threads,
        "simhost started"
    );

    // SIGINT is left to the interrupt handler.
    server.run(RunArgs {
        shutdown_signal: Box::new(TerminateSignalWatch),
    });

    tracing::info!("simhost stopped");
    std::process::exit(0)
}

/// Build the Pingora server.
pub fn build_pingora_server(config: &SiteConfig) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new()
            .ok_or_else(|| anyhow!("could not construct Pingora server configuration"))?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let site = Arc::new(StaticSite::from_config(config));
    let gateway = SiteGateway::new(site);

    // Build HTTP service from Pingora's proxy machinery.
    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);

    // Register service.
    server.add_service(svc);

    Ok(server)
}
