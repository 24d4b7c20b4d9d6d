use anyhow::Context;
use clap::Parser;
use toroid_life::config::Cli;
use toroid_life::config::Config;
use toroid_life::driver;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the renderer
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::try_from(Cli::parse()).context("Invalid configuration")?;

    driver::run(&config)
}
