use std::path::PathBuf;

use clap::Parser;

/// Userscripts: a desktop shell for the userscript manager UI.
#[derive(Parser, Debug)]
#[command(name = "userscripts", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `userscripts=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory holding the bundled web UI.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Keep the scripts directory in memory only; nothing is written.
    #[arg(long)]
    pub ephemeral: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
