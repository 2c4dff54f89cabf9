//! Unified error codes for the hotel back office
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Employee errors
//! - 2xxx: Guest errors
//! - 3xxx: Room errors
//! - 4xxx: Booking errors
//! - 5xxx: Payment errors
//! - 6xxx: Service errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the admin console can
/// match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,
    /// Row is still referenced by another row (protect-on-delete)
    ReferencedRecord = 9,
    /// Foreign key points to a row that does not exist
    InvalidReference = 10,

    // ==================== 1xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 1001,
    /// Username already taken
    EmployeeUsernameExists = 1002,
    /// Admin model already registered
    ModelAlreadyRegistered = 1101,
    /// Admin model not registered
    ModelNotRegistered = 1102,

    // ==================== 2xxx: Guest ====================
    /// Guest not found
    GuestNotFound = 2001,
    /// Passport number already registered
    GuestPassportExists = 2002,
    /// Guest still has bookings
    GuestHasBookings = 2003,

    // ==================== 3xxx: Room ====================
    /// Room not found
    RoomNotFound = 3001,
    /// Room number already exists
    RoomNumberExists = 3002,
    /// Room still has bookings
    RoomHasBookings = 3003,
    /// Room type not found
    RoomTypeNotFound = 3101,
    /// Room type still has rooms
    RoomTypeInUse = 3102,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Booking still has payments
    BookingHasPayments = 4002,
    /// Guest service line not found
    GuestServiceNotFound = 4101,

    // ==================== 5xxx: Payment ====================
    /// Payment not found
    PaymentNotFound = 5001,

    // ==================== 6xxx: Service ====================
    /// Service not found
    ServiceNotFound = 6001,
    /// Service still referenced by guest service lines
    ServiceInUse = 6002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
    /// Migration failed
    MigrationFailed = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ReferencedRecord => "Record is referenced by other records",
            ErrorCode::InvalidReference => "Referenced record does not exist",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeUsernameExists => "Employee username already exists",
            ErrorCode::ModelAlreadyRegistered => "Model is already registered",
            ErrorCode::ModelNotRegistered => "Model is not registered",

            // Guest
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::GuestPassportExists => "Passport number already registered",
            ErrorCode::GuestHasBookings => "Guest has bookings",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomNumberExists => "Room number already exists",
            ErrorCode::RoomHasBookings => "Room has bookings",
            ErrorCode::RoomTypeNotFound => "Room type not found",
            ErrorCode::RoomTypeInUse => "Room type is used by rooms",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingHasPayments => "Booking has payments",
            ErrorCode::GuestServiceNotFound => "Guest service not found",

            // Payment
            ErrorCode::PaymentNotFound => "Payment not found",

            // Service
            ErrorCode::ServiceNotFound => "Service not found",
            ErrorCode::ServiceInUse => "Service is used by guest services",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::MigrationFailed => "Database migration failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),
            9 => Ok(ErrorCode::ReferencedRecord),
            10 => Ok(ErrorCode::InvalidReference),

            // Employee
            1001 => Ok(ErrorCode::EmployeeNotFound),
            1002 => Ok(ErrorCode::EmployeeUsernameExists),
            1101 => Ok(ErrorCode::ModelAlreadyRegistered),
            1102 => Ok(ErrorCode::ModelNotRegistered),

            // Guest
            2001 => Ok(ErrorCode::GuestNotFound),
            2002 => Ok(ErrorCode::GuestPassportExists),
            2003 => Ok(ErrorCode::GuestHasBookings),

            // Room
            3001 => Ok(ErrorCode::RoomNotFound),
            3002 => Ok(ErrorCode::RoomNumberExists),
            3003 => Ok(ErrorCode::RoomHasBookings),
            3101 => Ok(ErrorCode::RoomTypeNotFound),
            3102 => Ok(ErrorCode::RoomTypeInUse),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::BookingHasPayments),
            4101 => Ok(ErrorCode::GuestServiceNotFound),

            // Payment
            5001 => Ok(ErrorCode::PaymentNotFound),

            // Service
            6001 => Ok(ErrorCode::ServiceNotFound),
            6002 => Ok(ErrorCode::ServiceInUse),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::MigrationFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ReferencedRecord.code(), 9);
        assert_eq!(ErrorCode::EmployeeUsernameExists.code(), 1002);
        assert_eq!(ErrorCode::GuestPassportExists.code(), 2002);
        assert_eq!(ErrorCode::RoomNumberExists.code(), 3002);
        assert_eq!(ErrorCode::RoomTypeInUse.code(), 3102);
        assert_eq!(ErrorCode::BookingHasPayments.code(), 4002);
        assert_eq!(ErrorCode::PaymentNotFound.code(), 5001);
        assert_eq!(ErrorCode::ServiceInUse.code(), 6002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(2002), Ok(ErrorCode::GuestPassportExists));
        assert_eq!(ErrorCode::try_from(3102), Ok(ErrorCode::RoomTypeInUse));
        assert_eq!(ErrorCode::try_from(9006), Ok(ErrorCode::MigrationFailed));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(7001), Err(InvalidErrorCode(7001)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::RoomNumberExists).unwrap();
        assert_eq!(json, "3002");

        let code: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(code, ErrorCode::BookingHasPayments);

        let result: Result<ErrorCode, _> = serde_json::from_str("12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::GuestNotFound), "2001");
        assert_eq!(ErrorCode::GuestNotFound.message(), "Guest not found");
        assert_eq!(
            format!("{}", InvalidErrorCode(42)),
            "invalid error code: 42"
        );
    }
}
