//! Payment Repository

use super::{RepoError, RepoResult};
use shared::models::{Payment, PaymentCreate, PaymentStatus, PaymentUpdate};
use sqlx::SqlitePool;

const PAYMENT_SELECT: &str =
    "SELECT id, booking_id, amount, payment_date, method, status FROM payment";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Payment>> {
    let sql = format!("{PAYMENT_SELECT} ORDER BY payment_date DESC, id DESC");
    let payments = sqlx::query_as::<_, Payment>(&sql).fetch_all(pool).await?;
    Ok(payments)
}

pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<Payment>> {
    let sql = format!("{PAYMENT_SELECT} ORDER BY payment_date DESC, id DESC LIMIT ? OFFSET ?");
    let payments = sqlx::query_as::<_, Payment>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(payments)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payment")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payment>> {
    let sql = format!("{PAYMENT_SELECT} WHERE id = ?");
    let payment = sqlx::query_as::<_, Payment>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(payment)
}

pub async fn find_by_booking(pool: &SqlitePool, booking_id: i64) -> RepoResult<Vec<Payment>> {
    let sql = format!("{PAYMENT_SELECT} WHERE booking_id = ? ORDER BY payment_date, id");
    let payments = sqlx::query_as::<_, Payment>(&sql)
        .bind(booking_id)
        .fetch_all(pool)
        .await?;
    Ok(payments)
}

/// Record a payment; `payment_date` is stamped here and never changed
pub async fn create(pool: &SqlitePool, data: PaymentCreate) -> RepoResult<Payment> {
    let now = chrono::Utc::now();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO payment (booking_id, amount, payment_date, method, status) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
    )
    .bind(data.booking_id)
    .bind(data.amount)
    .bind(now)
    .bind(data.method)
    .bind(data.status.unwrap_or_default())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create payment".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: PaymentUpdate) -> RepoResult<Payment> {
    let rows = sqlx::query(
        "UPDATE payment SET booking_id = COALESCE(?1, booking_id), amount = COALESCE(?2, amount), method = COALESCE(?3, method), status = COALESCE(?4, status) WHERE id = ?5",
    )
    .bind(data.booking_id)
    .bind(data.amount)
    .bind(data.method)
    .bind(data.status)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Payment {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Payment {id} not found")))
}

pub async fn set_status(pool: &SqlitePool, id: i64, status: PaymentStatus) -> RepoResult<Payment> {
    update(
        pool,
        id,
        PaymentUpdate {
            status: Some(status),
            ..Default::default()
        },
    )
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM payment WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{booking, guest, room, room_type};
    use crate::db::test_pool;
    use chrono::NaiveDate;
    use shared::models::{
        BookingCreate, GuestCreate, Money, PaymentMethod, RoomCreate, RoomTypeCreate,
    };

    async fn seed_booking(pool: &SqlitePool) -> i64 {
        let type_id = room_type::create(
            pool,
            RoomTypeCreate {
                name: "Suite".to_string(),
                description: Some("Two rooms".to_string()),
                base_price: Money::from(9000),
                max_guests: 4,
            },
        )
        .await
        .unwrap()
        .id;
        let room_id = room::create(
            pool,
            RoomCreate {
                room_number: "601".to_string(),
                room_type_id: type_id,
                floor: 6,
                status: None,
            },
        )
        .await
        .unwrap()
        .id;
        let guest_id = guest::create(
            pool,
            GuestCreate {
                full_name: "Elena Kuznetsova".to_string(),
                passport_number: "4611 222333".to_string(),
                phone: "+7 904 123 00 00".to_string(),
                email: Some("elena@example.com".to_string()),
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
                check_in_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
                check_out_date: NaiveDate::from_ymd_opt(2024, 10, 4).unwrap(),
                status: None,
                total_price: Money::from(27000),
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_create_defaults_status_completed() {
        let pool = test_pool().await;
        let booking_id = seed_booking(&pool).await;
        let payment = create(
            &pool,
            PaymentCreate {
                booking_id,
                amount: "13500.50".parse().unwrap(),
                method: PaymentMethod::Card,
                status: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(payment.status, PaymentStatus::Completed);
        assert_eq!(payment.to_string(), format!("Payment #{} - 13500.50", payment.id));
    }

    #[tokio::test]
    async fn test_status_change_keeps_payment_date() {
        let pool = test_pool().await;
        let booking_id = seed_booking(&pool).await;
        let payment = create(
            &pool,
            PaymentCreate {
                booking_id,
                amount: Money::from(100),
                method: PaymentMethod::Online,
                status: Some(PaymentStatus::Pending),
            },
        )
        .await
        .unwrap();

        let failed = set_status(&pool, payment.id, PaymentStatus::Failed)
            .await
            .unwrap();
        assert_eq!(failed.status, PaymentStatus::Failed);
        assert_eq!(failed.payment_date, payment.payment_date);
    }

    #[tokio::test]
    async fn test_payments_block_booking_delete_until_removed() {
        let pool = test_pool().await;
        let booking_id = seed_booking(&pool).await;
        let payment = create(
            &pool,
            PaymentCreate {
                booking_id,
                amount: Money::from(27000),
                method: PaymentMethod::Cash,
                status: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(find_by_booking(&pool, booking_id).await.unwrap().len(), 1);

        assert!(matches!(
            booking::delete(&pool, booking_id).await.unwrap_err(),
            RepoError::Protected(_)
        ));
        assert!(delete(&pool, payment.id).await.unwrap());
        assert!(booking::delete(&pool, booking_id).await.unwrap());
    }
}
