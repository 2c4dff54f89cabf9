//! Unified error system for the hotel back office
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation, integrity conflicts)
//! - 1xxx: Employee and admin registry errors
//! - 2xxx: Guest errors
//! - 3xxx: Room and room type errors
//! - 4xxx: Booking errors
//! - 5xxx: Payment errors
//! - 6xxx: Service errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::GuestPassportExists, "Passport AB123 exists")
//!     .with_detail("field", "passport_number");
//! assert_eq!(err.code.code(), 2002);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
