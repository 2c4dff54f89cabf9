//! Input validation helpers
//!
//! Field-level checks applied before writes: required text, maximum
//! lengths, email format and currency precision. SQLite TEXT has no
//! built-in length enforcement, so the limits live here.
//!
//! Nothing here compares fields with each other: a booking whose
//! check-out precedes its check-in passes.

use crate::utils::AppError;
use shared::models::{
    BookingCreate, BookingUpdate, EmployeeCreate, EmployeeUpdate, GuestCreate, GuestUpdate, Money,
    PaymentCreate, PaymentUpdate, RoomCreate, RoomTypeCreate, RoomTypeUpdate, RoomUpdate,
    ServiceCreate, ServiceUpdate,
};
use validator::ValidateEmail;

// ── Text length limits ──────────────────────────────────────────────

/// Login names
pub const MAX_USERNAME_LEN: usize = 150;

/// Person names: guests, employees; service names
pub const MAX_NAME_LEN: usize = 100;

/// Room type names
pub const MAX_ROOM_TYPE_NAME_LEN: usize = 50;

/// Passport numbers
pub const MAX_PASSPORT_LEN: usize = 20;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 20;

/// Room numbers
pub const MAX_ROOM_NUMBER_LEN: usize = 10;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Field helpers ───────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(
            AppError::validation(format!("{field} must not be empty")).with_detail("field", field),
        );
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate an optional email address; an empty string counts as absent
pub fn validate_email(value: &Option<String>, field: &str) -> Result<(), AppError> {
    validate_optional_text(value, field, MAX_EMAIL_LEN)?;
    if let Some(email) = value
        && !email.is_empty()
        && !email.validate_email()
    {
        return Err(AppError::validation(format!("{field} is not a valid email address"))
            .with_detail("field", field));
    }
    Ok(())
}

/// Validate a currency value against `DECIMAL(10, 2)`
pub fn validate_money(value: &Money, field: &str) -> Result<(), AppError> {
    if !value.fits_column() {
        return Err(AppError::validation(format!(
            "{field} must have at most 10 digits with 2 decimal places (got {})",
            value.amount()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

// ── Payload validation ──────────────────────────────────────────────

pub fn validate_employee_create(data: &EmployeeCreate) -> Result<(), AppError> {
    validate_required_text(&data.username, "username", MAX_USERNAME_LEN)?;
    validate_required_text(&data.password, "password", MAX_PASSWORD_LEN)?;
    validate_required_text(&data.full_name, "full_name", MAX_NAME_LEN)?;
    validate_optional_text(&data.phone, "phone", MAX_PHONE_LEN)?;
    validate_email(&data.email, "email")
}

pub fn validate_employee_update(data: &EmployeeUpdate) -> Result<(), AppError> {
    if let Some(username) = &data.username {
        validate_required_text(username, "username", MAX_USERNAME_LEN)?;
    }
    if let Some(password) = &data.password {
        validate_required_text(password, "password", MAX_PASSWORD_LEN)?;
    }
    if let Some(full_name) = &data.full_name {
        validate_required_text(full_name, "full_name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&data.phone, "phone", MAX_PHONE_LEN)?;
    validate_email(&data.email, "email")
}

pub fn validate_guest_create(data: &GuestCreate) -> Result<(), AppError> {
    validate_required_text(&data.full_name, "full_name", MAX_NAME_LEN)?;
    validate_required_text(&data.passport_number, "passport_number", MAX_PASSPORT_LEN)?;
    validate_required_text(&data.phone, "phone", MAX_PHONE_LEN)?;
    validate_email(&data.email, "email")
}

pub fn validate_guest_update(data: &GuestUpdate) -> Result<(), AppError> {
    if let Some(full_name) = &data.full_name {
        validate_required_text(full_name, "full_name", MAX_NAME_LEN)?;
    }
    if let Some(passport) = &data.passport_number {
        validate_required_text(passport, "passport_number", MAX_PASSPORT_LEN)?;
    }
    if let Some(phone) = &data.phone {
        validate_required_text(phone, "phone", MAX_PHONE_LEN)?;
    }
    validate_email(&data.email, "email")
}

pub fn validate_room_type_create(data: &RoomTypeCreate) -> Result<(), AppError> {
    validate_required_text(&data.name, "name", MAX_ROOM_TYPE_NAME_LEN)?;
    validate_money(&data.base_price, "base_price")
}

pub fn validate_room_type_update(data: &RoomTypeUpdate) -> Result<(), AppError> {
    if let Some(name) = &data.name {
        validate_required_text(name, "name", MAX_ROOM_TYPE_NAME_LEN)?;
    }
    if let Some(price) = &data.base_price {
        validate_money(price, "base_price")?;
    }
    Ok(())
}

pub fn validate_room_create(data: &RoomCreate) -> Result<(), AppError> {
    validate_required_text(&data.room_number, "room_number", MAX_ROOM_NUMBER_LEN)
}

pub fn validate_room_update(data: &RoomUpdate) -> Result<(), AppError> {
    if let Some(number) = &data.room_number {
        validate_required_text(number, "room_number", MAX_ROOM_NUMBER_LEN)?;
    }
    Ok(())
}

pub fn validate_booking_create(data: &BookingCreate) -> Result<(), AppError> {
    validate_money(&data.total_price, "total_price")
}

pub fn validate_booking_update(data: &BookingUpdate) -> Result<(), AppError> {
    if let Some(price) = &data.total_price {
        validate_money(price, "total_price")?;
    }
    Ok(())
}

pub fn validate_service_create(data: &ServiceCreate) -> Result<(), AppError> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_money(&data.price, "price")
}

pub fn validate_service_update(data: &ServiceUpdate) -> Result<(), AppError> {
    if let Some(name) = &data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = &data.price {
        validate_money(price, "price")?;
    }
    Ok(())
}

pub fn validate_payment_create(data: &PaymentCreate) -> Result<(), AppError> {
    validate_money(&data.amount, "amount")
}

pub fn validate_payment_update(data: &PaymentUpdate) -> Result<(), AppError> {
    if let Some(amount) = &data.amount {
        validate_money(amount, "amount")?;
    }
    Ok(())
}
