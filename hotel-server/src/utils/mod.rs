//! Utility module
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`repo_err_to_app`] - storage error conversion
//! - logging, password hashing and field validation

pub mod error;
pub mod logger;
pub mod password;
pub mod validation;

pub use error::{AppError, AppResult, EntityCodes, ErrorCategory, ErrorCode, repo_err_to_app};
