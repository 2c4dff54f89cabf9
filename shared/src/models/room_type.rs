//! Room Type Model

use super::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room type entity (single, double, suite...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub base_price: Money,
    pub max_guests: i32,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Create room type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeCreate {
    pub name: String,
    /// Blank allowed; stored as an empty string when omitted
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: Money,
    pub max_guests: i32,
}

/// Update room type payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomTypeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<i32>,
}
