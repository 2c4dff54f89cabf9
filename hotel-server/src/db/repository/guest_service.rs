//! Guest Service Repository
//!
//! Service line items billed to a booking. Removed together with their
//! booking.

use super::{RepoError, RepoResult};
use shared::models::{GuestService, GuestServiceCreate, GuestServiceUpdate};
use sqlx::SqlitePool;

const GUEST_SERVICE_SELECT: &str = "SELECT gs.id, gs.booking_id, gs.service_id, s.name AS service_name, g.full_name AS guest_name, gs.quantity, gs.date FROM guest_service gs JOIN service s ON s.id = gs.service_id JOIN booking b ON b.id = gs.booking_id JOIN guest g ON g.id = b.guest_id";

/// Quantity used when the caller gives none
pub const DEFAULT_QUANTITY: i32 = 1;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<GuestService>> {
    let sql = format!("{GUEST_SERVICE_SELECT} ORDER BY gs.date DESC, gs.id DESC");
    let items = sqlx::query_as::<_, GuestService>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<GuestService>> {
    let sql = format!("{GUEST_SERVICE_SELECT} ORDER BY gs.date DESC, gs.id DESC LIMIT ? OFFSET ?");
    let items = sqlx::query_as::<_, GuestService>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guest_service")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<GuestService>> {
    let sql = format!("{GUEST_SERVICE_SELECT} WHERE gs.id = ?");
    let item = sqlx::query_as::<_, GuestService>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn find_by_booking(pool: &SqlitePool, booking_id: i64) -> RepoResult<Vec<GuestService>> {
    let sql = format!("{GUEST_SERVICE_SELECT} WHERE gs.booking_id = ? ORDER BY gs.date, gs.id");
    let items = sqlx::query_as::<_, GuestService>(&sql)
        .bind(booking_id)
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create(pool: &SqlitePool, data: GuestServiceCreate) -> RepoResult<GuestService> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO guest_service (booking_id, service_id, quantity, date) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(data.booking_id)
    .bind(data.service_id)
    .bind(data.quantity.unwrap_or(DEFAULT_QUANTITY))
    .bind(data.date)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create guest service".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: GuestServiceUpdate,
) -> RepoResult<GuestService> {
    let rows = sqlx::query(
        "UPDATE guest_service SET booking_id = COALESCE(?1, booking_id), service_id = COALESCE(?2, service_id), quantity = COALESCE(?3, quantity), date = COALESCE(?4, date) WHERE id = ?5",
    )
    .bind(data.booking_id)
    .bind(data.service_id)
    .bind(data.quantity)
    .bind(data.date)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Guest service {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Guest service {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM guest_service WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{booking, guest, payment, room, room_type, service};
    use crate::db::test_pool;
    use chrono::NaiveDate;
    use shared::models::{
        BookingCreate, GuestCreate, Money, PaymentCreate, PaymentMethod, RoomCreate,
        RoomTypeCreate, ServiceCreate,
    };

    async fn seed_booking(pool: &SqlitePool) -> i64 {
        let type_id = room_type::create(
            pool,
            RoomTypeCreate {
                name: "Standard".to_string(),
                description: None,
                base_price: Money::from(3500),
                max_guests: 2,
            },
        )
        .await
        .unwrap()
        .id;
        let room_id = room::create(
            pool,
            RoomCreate {
                room_number: "305".to_string(),
                room_type_id: type_id,
                floor: 3,
                status: None,
            },
        )
        .await
        .unwrap()
        .id;
        let guest_id = guest::create(
            pool,
            GuestCreate {
                full_name: "Pavel Orlov".to_string(),
                passport_number: "7700 555000".to_string(),
                phone: "+7 903 777 00 11".to_string(),
                email: None,
            },
        )
        .await
        .unwrap()
        .id;
        booking::create(
            pool,
            BookingCreate {
                guest_id,
                room_id,
                check_in_date: date(2024, 9, 1),
                check_out_date: date(2024, 9, 3),
                status: None,
                total_price: Money::from(7000),
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn seed_service(pool: &SqlitePool) -> i64 {
        service::create(
            pool,
            ServiceCreate {
                name: "Laundry".to_string(),
                price: Money::from(300),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_defaults_quantity_and_display() {
        let pool = test_pool().await;
        let booking_id = seed_booking(&pool).await;
        let service_id = seed_service(&pool).await;

        let item = create(
            &pool,
            GuestServiceCreate {
                booking_id,
                service_id,
                quantity: None,
                date: date(2024, 9, 2),
            },
        )
        .await
        .unwrap();

        assert_eq!(item.quantity, DEFAULT_QUANTITY);
        assert_eq!(item.to_string(), "Laundry for Pavel Orlov");
    }

    #[tokio::test]
    async fn test_booking_delete_cascades_to_services() {
        let pool = test_pool().await;
        let booking_id = seed_booking(&pool).await;
        let service_id = seed_service(&pool).await;
        for day in [1, 2] {
            create(
                &pool,
                GuestServiceCreate {
                    booking_id,
                    service_id,
                    quantity: Some(2),
                    date: date(2024, 9, day),
                },
            )
            .await
            .unwrap();
        }
        assert_eq!(find_by_booking(&pool, booking_id).await.unwrap().len(), 2);

        assert!(booking::delete(&pool, booking_id).await.unwrap());
        assert!(find_all(&pool).await.unwrap().is_empty());
        assert!(service::find_by_id(&pool, service_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_service_delete_protected_while_used() {
        let pool = test_pool().await;
        let booking_id = seed_booking(&pool).await;
        let service_id = seed_service(&pool).await;
        let item = create(
            &pool,
            GuestServiceCreate {
                booking_id,
                service_id,
                quantity: None,
                date: date(2024, 9, 1),
            },
        )
        .await
        .unwrap();

        let err = service::delete(&pool, service_id).await.unwrap_err();
        assert!(matches!(err, RepoError::Protected(_)));

        assert!(delete(&pool, item.id).await.unwrap());
        assert!(service::delete(&pool, service_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_booking_with_payment_keeps_its_services() {
        let pool = test_pool().await;
        let booking_id = seed_booking(&pool).await;
        let service_id = seed_service(&pool).await;
        create(
            &pool,
            GuestServiceCreate {
                booking_id,
                service_id,
                quantity: None,
                date: date(2024, 9, 1),
            },
        )
        .await
        .unwrap();
        payment::create(
            &pool,
            PaymentCreate {
                booking_id,
                amount: Money::from(7000),
                method: PaymentMethod::Cash,
                status: None,
            },
        )
        .await
        .unwrap();

        let err = booking::delete(&pool, booking_id).await.unwrap_err();
        assert!(matches!(err, RepoError::Protected(_)));
        assert_eq!(find_by_booking(&pool, booking_id).await.unwrap().len(), 1);
    }
}
