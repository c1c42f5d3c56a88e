//! Data models
//!
//! Shared between menu-server and API clients.
//! All IDs are `i64` snowflakes, all timestamps Unix milliseconds.

pub mod category;
pub mod menu;
pub mod product;
pub mod promotion;
pub mod time_of_day;
pub mod weekday;

// Re-exports
pub use category::*;
pub use menu::*;
pub use product::*;
pub use promotion::*;
pub use time_of_day::*;
pub use weekday::*;
