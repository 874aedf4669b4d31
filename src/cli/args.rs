//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::storage::StorageError;

/// School records in the terminal.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
pub struct Args {
    /// Write the plain-text export of the saved data and exit.
    #[arg(long)]
    pub export: bool,

    /// Directory holding data.json and the credentials file
    /// [default: XDG data directory]
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory receiving export files [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Skip the login/registration step.
    #[arg(long)]
    pub skip_login: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolves the arguments into a [`Config`].
    pub fn config(&self) -> Result<Config, StorageError> {
        Config::resolve(
            self.data_dir.clone(),
            self.export_dir.clone(),
            !self.skip_login,
        )
    }

    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
