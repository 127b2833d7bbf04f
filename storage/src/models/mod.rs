//! Registry data model.

mod registry;
mod user_record;

pub use registry::Registry;
pub use user_record::UserRecord;
