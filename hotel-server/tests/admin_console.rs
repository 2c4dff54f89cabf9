//! Admin console flows: provisioning, registry and intent dispatch.

use hotel_server::db::repository::employee;
use hotel_server::utils::password;
use hotel_server::{AdminService, AdminSite, Config, ErrorCode, provision};
use serde_json::json;
use shared::intent::{AdminIntent, DataResult};
use std::collections::HashMap;

async fn console() -> AdminService {
    let db = hotel_server::DbService::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database");
    AdminService::new(db.pool, AdminSite::hotel())
}

/// Send an intent in its JSON wire form
async fn send(admin: &AdminService, intent: serde_json::Value) -> DataResult {
    let intent: AdminIntent = serde_json::from_value(intent).expect("valid intent");
    admin.handle(intent).await
}

#[test]
fn registry_lists_models_in_registration_order() {
    let site = AdminSite::hotel();
    let plural: Vec<&str> = site.models().iter().map(|m| m.verbose_name_plural).collect();
    assert_eq!(
        plural,
        vec![
            "Employees",
            "Guests",
            "Room types",
            "Rooms",
            "Bookings",
            "Services",
            "Guest services",
            "Payments",
        ]
    );
}

#[tokio::test]
async fn front_desk_flow_over_json_intents() {
    let admin = console().await;

    let room_type = send(
        &admin,
        json!({"model": "room_type", "action": {"type": "Create", "data": {
            "name": "Standard", "base_price": "3200.00", "max_guests": 2
        }}}),
    )
    .await;
    assert!(room_type.success, "{}", room_type.message);

    let room = send(
        &admin,
        json!({"model": "room", "action": {"type": "Create", "data": {
            "room_number": "101", "room_type_id": room_type.id, "floor": 1
        }}}),
    )
    .await;
    assert!(room.success, "{}", room.message);
    assert_eq!(room.data.as_ref().unwrap()["status"], "available");

    let guest = send(
        &admin,
        json!({"model": "guest", "action": {"type": "Create", "data": {
            "full_name": "Irina Lebedeva", "passport_number": "4012 345678",
            "phone": "+7 906 111 22 33", "email": "irina@example.com"
        }}}),
    )
    .await;
    assert!(guest.success, "{}", guest.message);

    let booking = send(
        &admin,
        json!({"model": "booking", "action": {"type": "Create", "data": {
            "guest_id": guest.id, "room_id": room.id,
            "check_in_date": "2025-07-01", "check_out_date": "2025-07-04",
            "total_price": "9600.00"
        }}}),
    )
    .await;
    assert!(booking.success, "{}", booking.message);
    let data = booking.data.unwrap();
    assert_eq!(data["status"], "confirmed");
    assert_eq!(data["guest_name"], "Irina Lebedeva");
    assert_eq!(data["total_price"], "9600.00");

    let occupied = send(
        &admin,
        json!({"model": "room", "action": {"type": "Update", "data": {
            "id": room.id, "data": {"status": "occupied"}
        }}}),
    )
    .await;
    assert_eq!(occupied.data.unwrap()["status"], "occupied");

    let payment = send(
        &admin,
        json!({"model": "payment", "action": {"type": "Create", "data": {
            "booking_id": booking.id, "amount": "9600.00", "method": "card"
        }}}),
    )
    .await;
    assert_eq!(payment.data.unwrap()["status"], "completed");

    let blocked = send(
        &admin,
        json!({"model": "booking", "action": {"type": "Delete", "data": {"id": booking.id}}}),
    )
    .await;
    assert!(!blocked.success);
    assert_eq!(blocked.code, Some(ErrorCode::BookingHasPayments.code()));
}

#[tokio::test]
async fn constraint_errors_carry_model_codes() {
    let admin = console().await;
    let create_room_type = json!({"model": "room_type", "action": {"type": "Create", "data": {
        "name": "Suite", "base_price": "12000.00", "max_guests": 4
    }}});
    let room_type = send(&admin, create_room_type).await;
    let room = json!({"model": "room", "action": {"type": "Create", "data": {
        "room_number": "701", "room_type_id": room_type.id, "floor": 7
    }}});

    assert!(send(&admin, room.clone()).await.success);
    let duplicate = send(&admin, room).await;
    assert_eq!(duplicate.code, Some(ErrorCode::RoomNumberExists.code()));

    let in_use = send(
        &admin,
        json!({"model": "room_type", "action": {"type": "Delete", "data": {"id": room_type.id}}}),
    )
    .await;
    assert_eq!(in_use.code, Some(ErrorCode::RoomTypeInUse.code()));

    let dangling = send(
        &admin,
        json!({"model": "room", "action": {"type": "Create", "data": {
            "room_number": "702", "room_type_id": 9999, "floor": 7
        }}}),
    )
    .await;
    assert_eq!(dangling.code, Some(ErrorCode::InvalidReference.code()));
}

#[tokio::test]
async fn field_validation_rejects_bad_input() {
    let admin = console().await;

    let long_passport = send(
        &admin,
        json!({"model": "guest", "action": {"type": "Create", "data": {
            "full_name": "Too Long", "passport_number": "X".repeat(21), "phone": "+7"
        }}}),
    )
    .await;
    assert_eq!(long_passport.code, Some(ErrorCode::ValidationFailed.code()));

    let bad_email = send(
        &admin,
        json!({"model": "guest", "action": {"type": "Create", "data": {
            "full_name": "Bad Email", "passport_number": "1", "phone": "+7", "email": "nope"
        }}}),
    )
    .await;
    assert_eq!(bad_email.code, Some(ErrorCode::ValidationFailed.code()));

    let precise = send(
        &admin,
        json!({"model": "service", "action": {"type": "Create", "data": {
            "name": "Minibar", "price": "1.234"
        }}}),
    )
    .await;
    assert_eq!(precise.code, Some(ErrorCode::ValidationFailed.code()));
}

#[tokio::test]
async fn provisioning_creates_database_and_admin_once() {
    let dir = tempfile::tempdir().unwrap();
    let work_dir = dir.path().join("hotel");
    let vars: HashMap<&str, String> = HashMap::from([
        ("WORK_DIR", work_dir.to_string_lossy().into_owned()),
        ("ADMIN_USERNAME", "admin".to_string()),
        ("ADMIN_PASSWORD", "first-password".to_string()),
    ]);
    let config = Config::from_lookup(|key| vars.get(key).cloned());

    let admin = provision(&config).await.unwrap();
    assert!(config.database_path().exists());
    assert_eq!(admin.site().len(), 8);

    // Second run keeps the original password
    let rerun = Config {
        admin_password: Some("second-password".to_string()),
        ..config.clone()
    };
    let admin = provision(&rerun).await.unwrap();

    let staff = send(
        &admin,
        json!({"model": "employee", "action": {"type": "List", "data": {}}}),
    )
    .await;
    assert_eq!(staff.data.unwrap()["total"], 1);

    let db = hotel_server::DbService::new(config.database_path().to_str().unwrap())
        .await
        .unwrap();
    let stored = employee::find_by_username(&db.pool, "admin")
        .await
        .unwrap()
        .unwrap();
    assert!(password::verify_password(&stored.hash_pass, "first-password").unwrap());
}
