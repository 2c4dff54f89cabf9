//! Repository error conversion
//!
//! Storage errors carry no entity context, so each admin model supplies an
//! [`EntityCodes`] table that picks the code reported for not-found,
//! duplicate and protected-delete failures.
//!
//! | RepoError          | ErrorCode                    |
//! |--------------------|------------------------------|
//! | `NotFound`         | `codes.not_found`            |
//! | `Duplicate`        | `codes.duplicate`            |
//! | `Protected`        | `codes.protected`            |
//! | `InvalidReference` | `InvalidReference`           |
//! | `Required`         | `RequiredField`              |
//! | `Validation`       | `ValidationFailed`           |
//! | `Database`         | `DatabaseError`              |

use crate::db::repository::RepoError;
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

/// Per-entity error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCodes {
    pub not_found: ErrorCode,
    pub duplicate: ErrorCode,
    pub protected: ErrorCode,
}

impl EntityCodes {
    pub const GENERIC: EntityCodes = EntityCodes {
        not_found: ErrorCode::NotFound,
        duplicate: ErrorCode::AlreadyExists,
        protected: ErrorCode::ReferencedRecord,
    };
}

/// Convert a repository error using entity-specific codes
pub fn repo_err_to_app(err: RepoError, codes: &EntityCodes) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(codes.not_found, msg),
        RepoError::Duplicate(msg) => AppError::with_message(codes.duplicate, msg),
        RepoError::Protected(msg) => AppError::with_message(codes.protected, msg),
        RepoError::InvalidReference(msg) => {
            AppError::with_message(ErrorCode::InvalidReference, msg)
        }
        RepoError::Required(msg) => AppError::with_message(ErrorCode::RequiredField, msg),
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::Database(msg) => {
            tracing::error!(error = %msg, "Database error");
            AppError::database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        repo_err_to_app(err, &EntityCodes::GENERIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_codes_are_used() {
        let codes = EntityCodes {
            not_found: ErrorCode::GuestNotFound,
            duplicate: ErrorCode::GuestPassportExists,
            protected: ErrorCode::GuestHasBookings,
        };
        let err = repo_err_to_app(RepoError::Duplicate("AB123".into()), &codes);
        assert_eq!(err.code, ErrorCode::GuestPassportExists);
        assert_eq!(err.message, "AB123");

        let err = repo_err_to_app(RepoError::Protected("has bookings".into()), &codes);
        assert_eq!(err.code, ErrorCode::GuestHasBookings);
    }

    #[test]
    fn test_generic_conversion() {
        let err: AppError = RepoError::Required("guest.phone".into()).into();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err: AppError = RepoError::InvalidReference("room_type".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidReference);
        assert_eq!(err.code.category(), ErrorCategory::General);

        let err: AppError = RepoError::Database("disk I/O error".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
