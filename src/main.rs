#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roster::cli::{App, Args, Terminal, export_once};
use roster::storage::DataManager;

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = args.config()?;
    let manager = DataManager::new(&config.data_dir)?;
    info!(data_dir = %config.data_dir.display(), "starting");

    if args.export {
        let path = export_once(&manager, &config.export_dir)?;
        println!("Données exportées dans '{}' avec succès!", path.display());
        return Ok(());
    }

    let mut app = App::new(manager, config.export_dir, Terminal::new());
    app.run(config.login)?;
    Ok(())
}
