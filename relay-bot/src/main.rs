//! relay-bot CLI: run the relay bot or inspect its registry. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use relay_bot::{handle_users, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            group_chat_id,
        } => {
            let config = load_config(token, group_chat_id)?;
            run_bot(config).await
        }
        Commands::Users { data_file } => handle_users(data_file).await,
    }
}
