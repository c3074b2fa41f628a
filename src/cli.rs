use std::path::PathBuf;

use clap::Parser;

/// Load users through the view model and print every state it shows.
#[derive(Debug, Parser)]
#[command(name = "remote-state", version)]
pub struct Cli {
    /// User ids to load, one after another.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Config file (default: ~/.config/remote-state/config.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the simulated API latency.
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Keep showing the last user while the next one loads.
    #[arg(long = "keep-last")]
    pub keep_last: bool,

    /// Print each state as a JSON line instead of rendered text.
    #[arg(long = "json")]
    pub json: bool,
}
