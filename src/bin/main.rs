use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use tracing::{event, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fl_core::ConfigSnapshot;
use trade_catalog::cli_args::{Cli, Commands};
use trade_catalog::configuration::CatalogConfiguration;
use trade_catalog::export::CatalogData;
use trade_catalog::overview::render_overview;

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cfg = CatalogConfiguration::from_env().context("reading TRADE_CATALOG_* environment")?;
    event!(Level::DEBUG, "Catalog config: {:?}", cfg);

    match args.command {
        Commands::Export {
            snapshot,
            output,
            useful_only,
        } => {
            let snapshot = ConfigSnapshot::from_file(&snapshot)?;
            let catalog = CatalogData::build(snapshot, cfg.exporter_settings(), useful_only)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
                    catalog.write_json(BufWriter::new(file))?;
                    event!(Level::INFO, "Wrote catalog to {}", path.display());
                }
                None => catalog.write_json(std::io::stdout().lock())?,
            }
        }
        Commands::Overview { snapshot, limit } => {
            let snapshot = ConfigSnapshot::from_file(&snapshot)?;
            let catalog = CatalogData::build(snapshot, cfg.exporter_settings(), true)?;

            println!("{}", render_overview(&catalog.commodities, limit));
        }
    }

    Ok(())
}
