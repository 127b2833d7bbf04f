//! Configuration loaded from the environment (after `.env` via dotenvy).

pub(crate) mod bot_config;

pub use bot_config::BotConfig;

#[cfg(test)]
mod tests;
