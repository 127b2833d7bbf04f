//! Telegram connection config: bot token and optional custom Bot API server.

use anyhow::Result;
use std::env;
use tracing::info;

/// Telegram connectivity settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Custom Bot API server (e.g. a local `telegram-bot-api`); default api.telegram.org when None.
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: `token` overrides BOT_TOKEN, which is otherwise required; TELEGRAM_API_URL (or TELOXIDE_API_URL) optional.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|url| !url.is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Fails if telegram_api_url is set but not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointed at the custom API server when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)?;
                info!(url = %url, "Using custom Telegram Bot API server");
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_server() {
        let config = TelegramConfig {
            bot_token: "test_token".to_string(),
            telegram_api_url: None,
        };
        assert!(config.validate().is_ok());
        let bot = config.build_bot().unwrap();
        assert_eq!(bot.api_url().as_str(), "https://api.telegram.org/");
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = TelegramConfig {
            bot_token: "test_token".to_string(),
            telegram_api_url: Some("not a url".to_string()),
        };
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }

    #[test]
    fn test_build_bot_with_custom_url() {
        let config = TelegramConfig {
            bot_token: "test_token".to_string(),
            telegram_api_url: Some("http://localhost:8081".to_string()),
        };
        assert!(config.validate().is_ok());
        let bot = config.build_bot().unwrap();
        assert_eq!(bot.api_url().as_str(), "http://localhost:8081/");
    }
}
