//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::{Commands, ServeArgs};

/// Download videos and audio over HTTP using yt-dlp.
///
/// Without a subcommand the server starts, taking the `serve` options
/// directly.
#[derive(Parser, Debug)]
#[command(name = "tubegrab")]
#[command(about = "HTTP front end for yt-dlp downloads")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Log filter (e.g. `debug`, `tubegrab=trace`); overrides RUST_LOG
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

impl Cli {
    /// The command to run, defaulting to `serve`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve(self.serve))
    }
}
