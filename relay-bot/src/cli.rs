//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Relays candidates' private messages into a team group", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override BOT_TOKEN and GROUP_CHAT_ID).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        group_chat_id: Option<i64>,
    },
    /// Print the registered users from the state file, sorted by user id.
    Users {
        /// State file; defaults to USER_DATA_FILE or ./user_data.json.
        #[arg(short, long)]
        data_file: Option<String>,
    },
}

/// Load BotConfig from environment. Provided arguments override BOT_TOKEN / GROUP_CHAT_ID.
pub fn load_config(token: Option<String>, group_chat_id: Option<i64>) -> Result<BotConfig> {
    BotConfig::load(token, group_chat_id)
}
