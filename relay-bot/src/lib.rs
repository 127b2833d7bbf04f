//! # relay-bot
//!
//! Bootstrap for the candidate relay bot: argument parsing, config loading, handler wiring, and
//! the offline `users` report.

pub mod cli;
mod config;
mod runner;
mod users;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use runner::{build_handler_chain, run_bot};
pub use users::{format_users_table, handle_users};
