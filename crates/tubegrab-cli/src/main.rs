//! CLI entry point.

use clap::Parser;

use tubegrab_cli::{Cli, Commands, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so its values act as flag fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    match cli.into_command() {
        Commands::Serve(args) => handlers::serve::execute(args).await,
        Commands::Check { ytdlp } => handlers::check::execute(ytdlp).await,
    }
}
