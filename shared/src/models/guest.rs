//! Guest Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Guest entity (hotel patron)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Guest {
    pub id: i64,
    pub full_name: String,
    /// Unique across all guests
    pub passport_number: String,
    pub phone: String,
    pub email: Option<String>,
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// Create guest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub full_name: String,
    pub passport_number: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Update guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `Some("")` clears the stored address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
