//! # Relay handlers
//!
//! The relay policy as chain handlers: [`InboundFilter`] drops group chatter and the bot's own
//! messages, [`RegistrationHandler`] answers `/start`, and [`RelayHandler`] copies everything else
//! into the destination group under the user's anchor post, up to the per-user limit.

mod command;
mod context;
mod display_name;
mod inbound_filter;
mod registration_handler;
mod relay_handler;
mod state;
mod texts;

pub use command::is_start_command;
pub use context::RelayContext;
pub use display_name::display_name;
pub use inbound_filter::InboundFilter;
pub use registration_handler::RegistrationHandler;
pub use relay_handler::RelayHandler;
pub use state::RelayState;
pub use texts::{RelayTexts, DEFAULT_MESSAGE_LIMIT};
