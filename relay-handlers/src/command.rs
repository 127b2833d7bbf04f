/// Whether `text` is the `/start` registration command.
///
/// Accepts `/start`, `/start <payload>` and `/start@<bot_username>` (username compared case-insensitively).
/// A command addressed to a different bot is not ours.
pub fn is_start_command(text: &str, bot_username: Option<&str>) -> bool {
    let Some(head) = text.split_whitespace().next() else {
        return false;
    };
    let Some(command) = head.strip_prefix('/') else {
        return false;
    };

    match command.split_once('@') {
        None => command == "start",
        Some((name, mention)) => {
            name == "start"
                && bot_username.is_some_and(|username| username.eq_ignore_ascii_case(mention))
        }
    }
}
