//! Admin registration
//!
//! - [`ModelAdmin`] / [`AdminSite`] - model registry for the scaffolded console
//! - [`AdminService`] - executes console intents against the database

pub mod models;
pub mod registry;
pub mod service;

pub use registry::{
    AdminSite, Choice, FieldKind, FieldMeta, ModelAdmin, ModelMeta, OnDelete, Reference,
};
pub use service::AdminService;

use shared::models::{Booking, Employee, Guest, GuestService, Payment, Room, RoomType, Service};

impl AdminSite {
    /// Site with every hotel record type registered
    ///
    /// Order: Employee, Guest, RoomType, Room, Booking, Service,
    /// GuestService, Payment.
    pub fn hotel() -> Self {
        let mut site = Self::new();
        site.register_hotel_models();
        site
    }

    fn register_hotel_models(&mut self) {
        let results = [
            self.register::<Employee>(),
            self.register::<Guest>(),
            self.register::<RoomType>(),
            self.register::<Room>(),
            self.register::<Booking>(),
            self.register::<Service>(),
            self.register::<GuestService>(),
            self.register::<Payment>(),
        ];
        for err in results.into_iter().filter_map(Result::err) {
            tracing::warn!(code = %err.code, error = %err.message, "Admin model skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_site_order() {
        let site = AdminSite::hotel();
        let names: Vec<&str> = site.models().iter().map(|m| m.model).collect();
        assert_eq!(
            names,
            vec![
                "employee",
                "guest",
                "room_type",
                "room",
                "booking",
                "service",
                "guest_service",
                "payment",
            ]
        );
    }

    #[test]
    fn test_hotel_site_rejects_reregistration() {
        let mut site = AdminSite::hotel();
        assert!(site.register::<Guest>().is_err());
        assert_eq!(site.len(), 8);
    }

    #[test]
    fn test_every_foreign_key_targets_a_registered_model() {
        let site = AdminSite::hotel();
        for meta in site.models() {
            for field in &meta.fields {
                if let Some(reference) = field.references {
                    assert!(
                        site.is_registered(reference.model),
                        "{}.{} -> {}",
                        meta.model,
                        field.name,
                        reference.model
                    );
                }
            }
        }
    }
}
