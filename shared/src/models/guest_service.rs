//! Guest Service Model
//!
//! A service consumed under a booking. Rows are removed together with their
//! booking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Guest service line, joined with service and guest names for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GuestService {
    pub id: i64,
    pub booking_id: i64,
    pub service_id: i64,
    pub service_name: String,
    pub guest_name: String,
    pub quantity: i32,
    pub date: NaiveDate,
}

impl fmt::Display for GuestService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.service_name, self.guest_name)
    }
}

/// Create guest service payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestServiceCreate {
    pub booking_id: i64,
    pub service_id: i64,
    /// Defaults to 1
    #[serde(default)]
    pub quantity: Option<i32>,
    pub date: NaiveDate,
}

/// Update guest service payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}
