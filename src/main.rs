use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mbta_router::{config::Cli, source, Network, NetworkOptions, Router};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    info!("Processing stop distances from {:?}", cli.data);
    let records = source::load(&cli.data)?;

    info!("Creating network");
    let network = Network::build(&records, &NetworkOptions::from(&cli))
        .context("Could not build the stop network")?;

    if cli.list_stops {
        for name in network.stop_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let router = Router::new(Arc::new(network));
    let journey = router
        .journey(&cli.from, &cli.to)
        .with_context(|| format!("Could not route {:?} to {:?}", cli.from, cli.to))?;

    println!("{}", journey);

    Ok(())
}
