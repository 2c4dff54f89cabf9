//! Booking Repository
//!
//! Bookings are stored as given: the date range is not ordered and rooms
//! may be double-booked. `booking_date` is stamped on insert and never
//! rewritten.

use super::{RepoError, RepoResult};
use shared::models::{Booking, BookingCreate, BookingStatus, BookingUpdate};
use sqlx::SqlitePool;

const BOOKING_SELECT: &str = "SELECT b.id, b.guest_id, g.full_name AS guest_name, b.room_id, r.room_number, b.check_in_date, b.check_out_date, b.booking_date, b.status, b.total_price FROM booking b JOIN guest g ON g.id = b.guest_id JOIN room r ON r.id = b.room_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Booking>> {
    let sql = format!("{BOOKING_SELECT} ORDER BY b.booking_date DESC, b.id DESC");
    let bookings = sqlx::query_as::<_, Booking>(&sql).fetch_all(pool).await?;
    Ok(bookings)
}

pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<Booking>> {
    let sql = format!("{BOOKING_SELECT} ORDER BY b.booking_date DESC, b.id DESC LIMIT ? OFFSET ?");
    let bookings = sqlx::query_as::<_, Booking>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM booking")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Booking>> {
    let sql = format!("{BOOKING_SELECT} WHERE b.id = ?");
    let booking = sqlx::query_as::<_, Booking>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(booking)
}

pub async fn find_by_guest(pool: &SqlitePool, guest_id: i64) -> RepoResult<Vec<Booking>> {
    let sql = format!("{BOOKING_SELECT} WHERE b.guest_id = ? ORDER BY b.check_in_date, b.id");
    let bookings = sqlx::query_as::<_, Booking>(&sql)
        .bind(guest_id)
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}

pub async fn find_by_room(pool: &SqlitePool, room_id: i64) -> RepoResult<Vec<Booking>> {
    let sql = format!("{BOOKING_SELECT} WHERE b.room_id = ? ORDER BY b.check_in_date, b.id");
    let bookings = sqlx::query_as::<_, Booking>(&sql)
        .bind(room_id)
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}

pub async fn create(pool: &SqlitePool, data: BookingCreate) -> RepoResult<Booking> {
    let now = chrono::Utc::now();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO booking (guest_id, room_id, check_in_date, check_out_date, booking_date, status, total_price) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
    )
    .bind(data.guest_id)
    .bind(data.room_id)
    .bind(data.check_in_date)
    .bind(data.check_out_date)
    .bind(now)
    .bind(data.status.unwrap_or_default())
    .bind(data.total_price)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create booking".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: BookingUpdate) -> RepoResult<Booking> {
    let rows = sqlx::query(
        "UPDATE booking SET guest_id = COALESCE(?1, guest_id), room_id = COALESCE(?2, room_id), check_in_date = COALESCE(?3, check_in_date), check_out_date = COALESCE(?4, check_out_date), status = COALESCE(?5, status), total_price = COALESCE(?6, total_price) WHERE id = ?7",
    )
    .bind(data.guest_id)
    .bind(data.room_id)
    .bind(data.check_in_date)
    .bind(data.check_out_date)
    .bind(data.status)
    .bind(data.total_price)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Booking {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Booking {id} not found")))
}

/// Set the booking status; transitions are not guarded
pub async fn set_status(pool: &SqlitePool, id: i64, status: BookingStatus) -> RepoResult<Booking> {
    update(
        pool,
        id,
        BookingUpdate {
            status: Some(status),
            ..Default::default()
        },
    )
    .await
}

/// Delete a booking with its service line items; blocked by payments
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM booking WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| RepoError::from(e).on_delete(|| format!("Booking {id} has payments")))?;
    Ok(rows.rows_affected() > 0)
}
