//! Shared types for the hotel back office
//!
//! Record types, the fixed-point money type, the unified error system, and
//! the admin intent DTOs used by hotel-server and the admin console.

pub mod error;
pub mod intent;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Intent re-exports (for AdminIntent dispatch pattern)
pub use intent::{AdminIntent, CrudAction, DataResult, PageRequest, PaginatedResponse};
