//! Bot config: Telegram connection, destination group, state file, limit, logging, texts.

use anyhow::{Context, Result};
use relay_handlers::{RelayTexts, DEFAULT_MESSAGE_LIMIT};
use relay_telegram::TelegramConfig;
use std::env;

pub(crate) const DEFAULT_USER_DATA_FILE: &str = "./user_data.json";
const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN, TELEGRAM_API_URL / TELOXIDE_API_URL
    pub telegram: TelegramConfig,
    /// GROUP_CHAT_ID
    pub group_chat_id: i64,
    /// USER_DATA_FILE
    pub user_data_file: String,
    /// MESSAGE_LIMIT
    pub message_limit: u32,
    /// LOG_FILE
    pub log_file: String,
    pub texts: RelayTexts,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN and `group_chat_id` overrides GROUP_CHAT_ID.
    pub fn load(token: Option<String>, group_chat_id: Option<i64>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;

        let group_chat_id = match group_chat_id {
            Some(id) => id,
            None => {
                let raw = env::var("GROUP_CHAT_ID").context("GROUP_CHAT_ID not set")?;
                raw.trim()
                    .parse()
                    .with_context(|| format!("GROUP_CHAT_ID is not an integer: {}", raw))?
            }
        };

        let message_limit = match env::var("MESSAGE_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MESSAGE_LIMIT is not a non-negative integer: {}", raw))?,
            Err(_) => DEFAULT_MESSAGE_LIMIT,
        };

        let user_data_file =
            env::var("USER_DATA_FILE").unwrap_or_else(|_| DEFAULT_USER_DATA_FILE.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            group_chat_id,
            user_data_file,
            message_limit,
            log_file,
            texts: texts_from_env(),
        })
    }

    /// Fails on settings the bot cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.message_limit == 0 {
            anyhow::bail!("MESSAGE_LIMIT must be at least 1");
        }
        if self.user_data_file.trim().is_empty() {
            anyhow::bail!("USER_DATA_FILE is empty");
        }
        Ok(())
    }
}

/// Default texts with any of WELCOME_MESSAGE, ANNOUNCEMENT_PREFIX, ALREADY_REGISTERED_MESSAGE,
/// REGISTER_PROMPT_MESSAGE, LIMIT_REACHED_MESSAGE applied on top.
fn texts_from_env() -> RelayTexts {
    let defaults = RelayTexts::default();
    let var_or = |name: &str, default: String| {
        env::var(name)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    };
    RelayTexts {
        welcome_html: var_or("WELCOME_MESSAGE", defaults.welcome_html),
        announcement_prefix: var_or("ANNOUNCEMENT_PREFIX", defaults.announcement_prefix),
        already_registered: var_or("ALREADY_REGISTERED_MESSAGE", defaults.already_registered),
        register_prompt: var_or("REGISTER_PROMPT_MESSAGE", defaults.register_prompt),
        limit_reached: var_or("LIMIT_REACHED_MESSAGE", defaults.limit_reached),
    }
}
