//! Config tests.

use super::BotConfig;
use relay_handlers::RelayTexts;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "GROUP_CHAT_ID",
    "USER_DATA_FILE",
    "MESSAGE_LIMIT",
    "LOG_FILE",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "WELCOME_MESSAGE",
    "ANNOUNCEMENT_PREFIX",
    "ALREADY_REGISTERED_MESSAGE",
    "REGISTER_PROMPT_MESSAGE",
    "LIMIT_REACHED_MESSAGE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("GROUP_CHAT_ID", "-1001234567890");

    let config = BotConfig::load(None, None).unwrap();

    assert_eq!(config.telegram.bot_token, "test_token");
    assert!(config.telegram.telegram_api_url.is_none());
    assert_eq!(config.group_chat_id, -1001234567890);
    assert_eq!(config.user_data_file, "./user_data.json");
    assert_eq!(config.message_limit, 10);
    assert_eq!(config.log_file, "logs/relay-bot.log");
    assert_eq!(config.texts, RelayTexts::default());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("GROUP_CHAT_ID", "-42");
    env::set_var("USER_DATA_FILE", "/tmp/relay/users.json");
    env::set_var("MESSAGE_LIMIT", "3");
    env::set_var("LOG_FILE", "/tmp/relay/bot.log");
    env::set_var("ANNOUNCEMENT_PREFIX", "New #candidate: ");
    env::set_var("LIMIT_REACHED_MESSAGE", "That's enough.");

    let config = BotConfig::load(None, None).unwrap();

    assert_eq!(config.group_chat_id, -42);
    assert_eq!(config.user_data_file, "/tmp/relay/users.json");
    assert_eq!(config.message_limit, 3);
    assert_eq!(config.log_file, "/tmp/relay/bot.log");
    assert_eq!(config.texts.announcement("alice"), "New #candidate: @alice");
    assert_eq!(config.texts.limit_reached, "That's enough.");
    assert_eq!(config.texts.register_prompt, RelayTexts::default().register_prompt);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_overrides() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");
    env::set_var("GROUP_CHAT_ID", "-1");

    let config = BotConfig::load(Some("override_token".to_string()), Some(-2)).unwrap();

    assert_eq!(config.telegram.bot_token, "override_token");
    assert_eq!(config.group_chat_id, -2);
}

#[test]
#[serial]
fn test_missing_token_is_an_error() {
    clear_env();
    env::set_var("GROUP_CHAT_ID", "-1");

    assert!(BotConfig::load(None, None).is_err());
}

#[test]
#[serial]
fn test_missing_or_invalid_group_is_an_error() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    assert!(BotConfig::load(None, None).is_err());

    env::set_var("GROUP_CHAT_ID", "my-team");
    assert!(BotConfig::load(None, None).is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_zero_limit_and_bad_url() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("GROUP_CHAT_ID", "-1");
    env::set_var("MESSAGE_LIMIT", "0");

    let config = BotConfig::load(None, None).unwrap();
    assert!(config.validate().is_err());

    env::remove_var("MESSAGE_LIMIT");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
    let config = BotConfig::load(None, None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
