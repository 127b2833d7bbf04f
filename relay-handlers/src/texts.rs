//! Fixed conversational texts. Defaults can be overridden from configuration.

/// Messages a user may relay before being refused, counting the registration itself.
pub const DEFAULT_MESSAGE_LIMIT: u32 = 10;

/// Replies and announcements sent by the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayTexts {
    /// Sent to a new user after `/start`; HTML formatted.
    pub welcome_html: String,
    /// Prefix of the group announcement; followed by `@` and the display name.
    pub announcement_prefix: String,
    /// Sent on a repeated `/start`.
    pub already_registered: String,
    /// Sent to an unregistered user who writes anything but `/start`.
    pub register_prompt: String,
    /// Sent once the user has used up the message limit.
    pub limit_reached: String,
}

impl RelayTexts {
    /// Announcement posted into the group for a new user, e.g. `New candidate: @alice`.
    pub fn announcement(&self, display_name: &str) -> String {
        format!("{}@{}", self.announcement_prefix, display_name)
    }
}

impl Default for RelayTexts {
    fn default() -> Self {
        Self {
            welcome_html: "Hi! 👋 This bot collects contacts of candidates who would like an interview with our team. 👨‍💻\n\
                Please write a couple of words about yourself, it will help us find you 👀 \
                You can send your <b>CV</b> to this bot now or later, we will get it too.\n\n\
                <i>⚠️ Make sure strangers can message you by your username, or leave your contacts here</i>"
                .to_string(),
            announcement_prefix: "New candidate: ".to_string(),
            already_registered:
                "We already have your contact! Feel free to add something about yourself here, or a joke 🥸"
                    .to_string(),
            register_prompt: "Please send /start first 💁‍♂️".to_string(),
            limit_reached: "Well done, but there will be no DoS today 🫣".to_string(),
        }
    }
}
