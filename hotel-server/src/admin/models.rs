//! Admin descriptions of the hotel record types

use super::registry::{Choice, FieldMeta, ModelAdmin, OnDelete};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSPORT_LEN, MAX_PASSWORD_LEN, MAX_PHONE_LEN,
    MAX_ROOM_NUMBER_LEN, MAX_ROOM_TYPE_NAME_LEN, MAX_USERNAME_LEN,
};
use crate::utils::{EntityCodes, ErrorCode};
use shared::models::{
    Booking, BookingStatus, Employee, EmployeeRole, Guest, GuestService, MONEY_DECIMAL_PLACES,
    MONEY_MAX_DIGITS, Payment, PaymentMethod, PaymentStatus, Room, RoomStatus, RoomType, Service,
};

fn money(name: &'static str) -> FieldMeta {
    FieldMeta::decimal(name, MONEY_MAX_DIGITS, MONEY_DECIMAL_PLACES)
}

fn choices<T: Copy>(
    all: &[T],
    value: impl Fn(&T) -> &'static str,
    label: impl Fn(&T) -> &'static str,
) -> Vec<Choice> {
    all.iter()
        .map(|item| Choice {
            value: value(item),
            label: label(item),
        })
        .collect()
}

impl ModelAdmin for Employee {
    const MODEL: &'static str = "employee";
    const TABLE: &'static str = "employee";
    const VERBOSE_NAME: &'static str = "Employee";
    const VERBOSE_NAME_PLURAL: &'static str = "Employees";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::EmployeeNotFound,
        duplicate: ErrorCode::EmployeeUsernameExists,
        protected: ErrorCode::ReferencedRecord,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![
            FieldMeta::char("username", MAX_USERNAME_LEN).unique(),
            FieldMeta::password("password", MAX_PASSWORD_LEN),
            FieldMeta::char("full_name", MAX_NAME_LEN),
            FieldMeta::choice(
                "role",
                choices(&EmployeeRole::ALL, EmployeeRole::as_str, EmployeeRole::label),
            )
            .with_default(EmployeeRole::default().as_str()),
            FieldMeta::char("phone", MAX_PHONE_LEN).optional(),
            FieldMeta::email("email", MAX_EMAIL_LEN).optional(),
            FieldMeta::boolean("is_active").with_default("true"),
            FieldMeta::datetime("date_joined").auto_now_add(),
        ]
    }
}

impl ModelAdmin for Guest {
    const MODEL: &'static str = "guest";
    const TABLE: &'static str = "guest";
    const VERBOSE_NAME: &'static str = "Guest";
    const VERBOSE_NAME_PLURAL: &'static str = "Guests";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::GuestNotFound,
        duplicate: ErrorCode::GuestPassportExists,
        protected: ErrorCode::GuestHasBookings,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![
            FieldMeta::char("full_name", MAX_NAME_LEN),
            FieldMeta::char("passport_number", MAX_PASSPORT_LEN).unique(),
            FieldMeta::char("phone", MAX_PHONE_LEN),
            FieldMeta::email("email", MAX_EMAIL_LEN).optional(),
        ]
    }
}

impl ModelAdmin for RoomType {
    const MODEL: &'static str = "room_type";
    const TABLE: &'static str = "room_type";
    const VERBOSE_NAME: &'static str = "Room type";
    const VERBOSE_NAME_PLURAL: &'static str = "Room types";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::RoomTypeNotFound,
        duplicate: ErrorCode::AlreadyExists,
        protected: ErrorCode::RoomTypeInUse,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![
            FieldMeta::char("name", MAX_ROOM_TYPE_NAME_LEN),
            FieldMeta::text("description").optional(),
            money("base_price"),
            FieldMeta::integer("max_guests"),
        ]
    }
}

impl ModelAdmin for Room {
    const MODEL: &'static str = "room";
    const TABLE: &'static str = "room";
    const VERBOSE_NAME: &'static str = "Room";
    const VERBOSE_NAME_PLURAL: &'static str = "Rooms";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::RoomNotFound,
        duplicate: ErrorCode::RoomNumberExists,
        protected: ErrorCode::RoomHasBookings,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![
            FieldMeta::char("room_number", MAX_ROOM_NUMBER_LEN).unique(),
            FieldMeta::foreign_key("room_type_id", RoomType::MODEL, OnDelete::Protect),
            FieldMeta::integer("floor"),
            FieldMeta::choice(
                "status",
                choices(&RoomStatus::ALL, RoomStatus::as_str, RoomStatus::label),
            )
            .with_default(RoomStatus::default().as_str()),
        ]
    }
}

impl ModelAdmin for Booking {
    const MODEL: &'static str = "booking";
    const TABLE: &'static str = "booking";
    const VERBOSE_NAME: &'static str = "Booking";
    const VERBOSE_NAME_PLURAL: &'static str = "Bookings";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::BookingNotFound,
        duplicate: ErrorCode::AlreadyExists,
        protected: ErrorCode::BookingHasPayments,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![
            FieldMeta::foreign_key("guest_id", Guest::MODEL, OnDelete::Protect),
            FieldMeta::foreign_key("room_id", Room::MODEL, OnDelete::Protect),
            FieldMeta::date("check_in_date"),
            FieldMeta::date("check_out_date"),
            FieldMeta::datetime("booking_date").auto_now_add(),
            FieldMeta::choice(
                "status",
                choices(&BookingStatus::ALL, BookingStatus::as_str, BookingStatus::label),
            )
            .with_default(BookingStatus::default().as_str()),
            money("total_price"),
        ]
    }
}

impl ModelAdmin for Service {
    const MODEL: &'static str = "service";
    const TABLE: &'static str = "service";
    const VERBOSE_NAME: &'static str = "Service";
    const VERBOSE_NAME_PLURAL: &'static str = "Services";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::ServiceNotFound,
        duplicate: ErrorCode::AlreadyExists,
        protected: ErrorCode::ServiceInUse,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![FieldMeta::char("name", MAX_NAME_LEN), money("price")]
    }
}

impl ModelAdmin for GuestService {
    const MODEL: &'static str = "guest_service";
    const TABLE: &'static str = "guest_service";
    const VERBOSE_NAME: &'static str = "Guest service";
    const VERBOSE_NAME_PLURAL: &'static str = "Guest services";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::GuestServiceNotFound,
        duplicate: ErrorCode::AlreadyExists,
        protected: ErrorCode::ReferencedRecord,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![
            FieldMeta::foreign_key("booking_id", Booking::MODEL, OnDelete::Cascade),
            FieldMeta::foreign_key("service_id", Service::MODEL, OnDelete::Protect),
            FieldMeta::integer("quantity").with_default("1"),
            FieldMeta::date("date"),
        ]
    }
}

impl ModelAdmin for Payment {
    const MODEL: &'static str = "payment";
    const TABLE: &'static str = "payment";
    const VERBOSE_NAME: &'static str = "Payment";
    const VERBOSE_NAME_PLURAL: &'static str = "Payments";
    const CODES: EntityCodes = EntityCodes {
        not_found: ErrorCode::PaymentNotFound,
        duplicate: ErrorCode::AlreadyExists,
        protected: ErrorCode::ReferencedRecord,
    };

    fn fields() -> Vec<FieldMeta> {
        vec![
            FieldMeta::foreign_key("booking_id", Booking::MODEL, OnDelete::Protect),
            money("amount"),
            FieldMeta::datetime("payment_date").auto_now_add(),
            FieldMeta::choice(
                "method",
                choices(&PaymentMethod::ALL, PaymentMethod::as_str, PaymentMethod::label),
            ),
            FieldMeta::choice(
                "status",
                choices(&PaymentStatus::ALL, PaymentStatus::as_str, PaymentStatus::label),
            )
            .with_default(PaymentStatus::default().as_str()),
        ]
    }
}
