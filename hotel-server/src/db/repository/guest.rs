//! Guest Repository

use super::{RepoError, RepoResult};
use shared::models::{Guest, GuestCreate, GuestUpdate};
use sqlx::SqlitePool;

const GUEST_SELECT: &str = "SELECT id, full_name, passport_number, phone, email FROM guest";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Guest>> {
    let sql = format!("{GUEST_SELECT} ORDER BY full_name, id");
    let guests = sqlx::query_as::<_, Guest>(&sql).fetch_all(pool).await?;
    Ok(guests)
}

pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<Guest>> {
    let sql = format!("{GUEST_SELECT} ORDER BY full_name, id LIMIT ? OFFSET ?");
    let guests = sqlx::query_as::<_, Guest>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(guests)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guest")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Guest>> {
    let sql = format!("{GUEST_SELECT} WHERE id = ?");
    let guest = sqlx::query_as::<_, Guest>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(guest)
}

pub async fn find_by_passport(pool: &SqlitePool, passport_number: &str) -> RepoResult<Option<Guest>> {
    let sql = format!("{GUEST_SELECT} WHERE passport_number = ? LIMIT 1");
    let guest = sqlx::query_as::<_, Guest>(&sql)
        .bind(passport_number)
        .fetch_optional(pool)
        .await?;
    Ok(guest)
}

/// Match name, passport number or phone
pub async fn search(pool: &SqlitePool, query: &str) -> RepoResult<Vec<Guest>> {
    let pattern = format!("%{query}%");
    let sql = format!(
        "{GUEST_SELECT} WHERE full_name LIKE ?1 OR passport_number LIKE ?1 OR phone LIKE ?1 ORDER BY full_name, id"
    );
    let guests = sqlx::query_as::<_, Guest>(&sql)
        .bind(&pattern)
        .fetch_all(pool)
        .await?;
    Ok(guests)
}

pub async fn create(pool: &SqlitePool, data: GuestCreate) -> RepoResult<Guest> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO guest (full_name, passport_number, phone, email) VALUES (?1, ?2, ?3, NULLIF(?4, '')) RETURNING id",
    )
    .bind(&data.full_name)
    .bind(&data.passport_number)
    .bind(&data.phone)
    .bind(&data.email)
    .fetch_one(pool)
    .await
    .map_err(|e| passport_conflict(e, &data.passport_number))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create guest".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: GuestUpdate) -> RepoResult<Guest> {
    let rows = sqlx::query(
        "UPDATE guest SET full_name = COALESCE(?1, full_name), passport_number = COALESCE(?2, passport_number), phone = COALESCE(?3, phone), email = CASE WHEN ?4 IS NULL THEN email ELSE NULLIF(?4, '') END WHERE id = ?5",
    )
    .bind(&data.full_name)
    .bind(&data.passport_number)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| passport_conflict(e, data.passport_number.as_deref().unwrap_or_default()))?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Guest {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Guest {id} not found")))
}

/// Hard delete; blocked while bookings reference the guest
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM guest WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| RepoError::from(e).on_delete(|| format!("Guest {id} has bookings")))?;
    Ok(rows.rows_affected() > 0)
}

fn passport_conflict(err: sqlx::Error, passport_number: &str) -> RepoError {
    match RepoError::from(err) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!(
            "Passport number '{passport_number}' already registered"
        )),
        other => other,
    }
}
