use clap::Parser;
use minihttp::config::{Cli, Config};
use minihttp::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from_cli(Cli::parse())?;
    match &cfg.directory {
        Some(dir) => tracing::info!("Serving files from {}", dir.display()),
        None => tracing::warn!("No --directory given, /files/ routes are unavailable"),
    }

    tokio::select! {
        res = server::listener::run(cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
