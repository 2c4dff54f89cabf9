//! Data models
//!
//! Shared between hotel-server and the admin console (via intents).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod booking;
pub mod employee;
pub mod guest;
pub mod guest_service;
pub mod money;
pub mod payment;
pub mod room;
pub mod room_type;
pub mod service;

// Re-exports
pub use booking::*;
pub use employee::*;
pub use guest::*;
pub use guest_service::*;
pub use money::*;
pub use payment::*;
pub use room::*;
pub use room_type::*;
pub use service::*;
