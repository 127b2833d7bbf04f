//! `users` command: offline report of the registry file.

use anyhow::{Context, Result};
use std::env;
use storage::{JsonFileStore, Registry, RegistryStore};

use crate::config::bot_config::DEFAULT_USER_DATA_FILE;

const USERNAME_PREVIEW_LEN: usize = 32;

/// Prints the registry at `data_file` (or USER_DATA_FILE, or the default path).
pub async fn handle_users(data_file: Option<String>) -> Result<()> {
    let path = data_file.unwrap_or_else(|| {
        env::var("USER_DATA_FILE").unwrap_or_else(|_| DEFAULT_USER_DATA_FILE.to_string())
    });

    let registry = JsonFileStore::new(&path)
        .load()
        .await
        .with_context(|| format!("Read user data from {}", path))?;

    if registry.is_empty() {
        println!("No registered users (path: {}).", path);
        return Ok(());
    }

    println!("{} registered user(s) (path: {}):\n", registry.len(), path);
    print!("{}", format_users_table(&registry));
    Ok(())
}

/// One header line plus one line per user, ordered by user id.
pub fn format_users_table(registry: &Registry) -> String {
    let mut out = format!(
        "{:<16} {:<32} {:<12} {}\n",
        "USER_ID", "USERNAME", "ANCHOR", "MESSAGES"
    );
    for (user_id, record) in registry.iter() {
        let username: String = if record.username.chars().count() > USERNAME_PREVIEW_LEN {
            let mut s: String = record.username.chars().take(USERNAME_PREVIEW_LEN - 3).collect();
            s.push_str("...");
            s
        } else {
            record.username.clone()
        };
        out.push_str(&format!(
            "{:<16} {:<32} {:<12} {}\n",
            user_id, username, record.first_message_id, record.message_count
        ));
    }
    out
}
