pub mod date;
pub mod formatting;

pub use date::format_created_at;
pub use formatting::{capitalize, pluralize};
