use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shop")]
#[command(about = "Sports equipment shop CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:5000")]
    pub(crate) server: String,

    /// Session state directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub(crate) state_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
