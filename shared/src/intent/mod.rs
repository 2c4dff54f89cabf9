//! Intent module - unified admin CRUD dispatch
//!
//! The admin console sends one serialized [`AdminIntent`] per operation; the
//! server routes it to the matching repository and answers with a
//! [`DataResult`].

pub mod query;

use crate::models::*;
use serde::{Deserialize, Serialize};

// Re-exports
pub use query::*;

/// Generic CRUD action
///
/// Type parameters:
/// - `C`: create payload
/// - `U`: update payload (fields are `Option`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CrudAction<C, U> {
    /// List rows, optionally one page at a time
    List(PageRequest),
    /// Fetch one row
    Get { id: i64 },
    /// Create
    Create(C),
    /// Partial update
    Update { id: i64, data: U },
    /// Delete (employees are deactivated instead)
    Delete { id: i64 },
}

impl<C, U> CrudAction<C, U> {
    /// Action name as shown in logs
    pub fn name(&self) -> &'static str {
        match self {
            CrudAction::List(_) => "list",
            CrudAction::Get { .. } => "get",
            CrudAction::Create(_) => "create",
            CrudAction::Update { .. } => "update",
            CrudAction::Delete { .. } => "delete",
        }
    }
}

/// Admin intent - single entry point for every console CRUD operation
///
/// One variant per registered model. `#[serde(tag = "model", content = "action")]`
/// keeps the JSON flat:
///
/// ```json
/// {
///   "model": "guest",
///   "action": { "type": "Create", "data": { "full_name": "Anna", "passport_number": "4510 123456", "phone": "+7 900" } }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", content = "action", rename_all = "snake_case")]
pub enum AdminIntent {
    Employee(CrudAction<EmployeeCreate, EmployeeUpdate>),
    Guest(CrudAction<GuestCreate, GuestUpdate>),
    RoomType(CrudAction<RoomTypeCreate, RoomTypeUpdate>),
    Room(CrudAction<RoomCreate, RoomUpdate>),
    Booking(CrudAction<BookingCreate, BookingUpdate>),
    Service(CrudAction<ServiceCreate, ServiceUpdate>),
    GuestService(CrudAction<GuestServiceCreate, GuestServiceUpdate>),
    Payment(CrudAction<PaymentCreate, PaymentUpdate>),
}

impl AdminIntent {
    /// Registry name of the target model
    pub fn model(&self) -> &'static str {
        match self {
            AdminIntent::Employee(_) => "employee",
            AdminIntent::Guest(_) => "guest",
            AdminIntent::RoomType(_) => "room_type",
            AdminIntent::Room(_) => "room",
            AdminIntent::Booking(_) => "booking",
            AdminIntent::Service(_) => "service",
            AdminIntent::GuestService(_) => "guest_service",
            AdminIntent::Payment(_) => "payment",
        }
    }

    /// CRUD action name
    pub fn action(&self) -> &'static str {
        match self {
            AdminIntent::Employee(a) => a.name(),
            AdminIntent::Guest(a) => a.name(),
            AdminIntent::RoomType(a) => a.name(),
            AdminIntent::Room(a) => a.name(),
            AdminIntent::Booking(a) => a.name(),
            AdminIntent::Service(a) => a.name(),
            AdminIntent::GuestService(a) => a.name(),
            AdminIntent::Payment(a) => a.name(),
        }
    }
}

/// Data operation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Operation message
    pub message: String,
    /// Returned data (the full row after create/update, the page for lists)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Affected ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Error code on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl DataResult {
    /// Success without data
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            id: None,
            code: None,
        }
    }

    /// Success with data
    pub fn ok_with_data<T: Serialize>(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: serde_json::to_value(data).ok(),
            id: None,
            code: None,
        }
    }

    /// Success with the affected ID
    pub fn ok_with_id(message: impl Into<String>, id: i64) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            id: Some(id),
            code: None,
        }
    }

    /// Failure from an application error
    pub fn err(error: &crate::error::AppError) -> Self {
        Self {
            success: false,
            message: error.message.clone(),
            data: None,
            id: None,
            code: Some(error.code.code()),
        }
    }
}
