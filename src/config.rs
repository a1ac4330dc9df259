use std::path::PathBuf;

use clap::Parser;

use crate::{
    data::{Miles, NamePolicy, TRANSFER_PENALTY},
    network::NetworkOptions,
};

pub const DEFAULT_DATA: &str = "data/MBTA_Rapid_Transit_Stop_Distances.csv";

#[derive(Parser, Debug)]
#[command(name = "mbta-router")]
#[command(about = "Shortest route between two MBTA rapid transit stops")]
pub struct Cli {
    /// Stop to start from
    #[arg(default_value = "Copley")]
    pub from: String,

    /// Stop to travel to
    #[arg(default_value = "Airport")]
    pub to: String,

    /// Stop distance table (CSV)
    #[arg(long, default_value = DEFAULT_DATA)]
    pub data: PathBuf,

    /// Cost of changing lines at a shared station, in miles
    #[arg(long, default_value_t = TRANSFER_PENALTY)]
    pub transfer_penalty: Miles,

    /// What to do when one stop name appears with several stop ids
    #[arg(long, value_enum, default_value_t = NamePolicy::LastWins)]
    pub names: NamePolicy,

    /// Print every known stop name and exit
    #[arg(long)]
    pub list_stops: bool,
}

impl From<&Cli> for NetworkOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            transfer_penalty: cli.transfer_penalty,
            names: cli.names,
        }
    }
}
