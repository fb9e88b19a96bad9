use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use ureq::AgentBuilder;

mod catalog;
mod geo;
mod geocode;
mod nearest;
mod output;

use geocode::Location;
use output::{Format, Units};

#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("location").required(true).multiple(true)))]
struct Cli {
    /// Street address to search near
    #[arg(long, group = "location")]
    address: Option<String>,

    /// Postal code to search near
    #[arg(long, group = "location")]
    zip: Option<String>,

    /// Distance units to report
    #[arg(long, value_enum, default_value = "mi")]
    units: Units,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    output: Format,

    /// Store catalog to search
    #[arg(long, default_value = "store-locations.csv")]
    catalog: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stores = catalog::load(&cli.catalog)?;

    // address wins when both are given
    let location = match (cli.address, cli.zip) {
        (Some(address), _) => Location::Address(address),
        (None, Some(zip)) => Location::Zip(zip),
        (None, None) => unreachable!("clap requires a location"),
    };

    let agent = AgentBuilder::new()
        .user_agent(concat!("find-store/", env!("CARGO_PKG_VERSION")))
        .build();
    let origin = match geocode::resolve(&agent, &location) {
        Some(x) => x,
        None => bail!("could not resolve {location} to a coordinate"),
    };

    let (store, km) = match nearest::find(origin, &stores) {
        Some(x) => x,
        None => bail!("no store found: the catalog is empty"),
    };

    println!("{}", output::render(store, km, cli.units, cli.output)?);

    Ok(())
}
