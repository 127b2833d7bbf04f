use relay_core::User;

/// Name shown in the group announcement: the username when set, otherwise first and last name joined by a space.
///
/// Missing or empty name parts are skipped, so a user without a last name yields just the first name.
pub fn display_name(user: &User) -> String {
    if let Some(username) = user.username.as_deref().filter(|u| !u.is_empty()) {
        return username.to_string();
    }

    [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
