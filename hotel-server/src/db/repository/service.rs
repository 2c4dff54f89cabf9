//! Service Repository
//!
//! Catalog of billable extras (breakfast, laundry, transfer).

use super::{RepoError, RepoResult};
use shared::models::{Service, ServiceCreate, ServiceUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Service>> {
    let services = sqlx::query_as::<_, Service>("SELECT id, name, price FROM service ORDER BY name, id")
        .fetch_all(pool)
        .await?;
    Ok(services)
}

pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<Service>> {
    let services = sqlx::query_as::<_, Service>(
        "SELECT id, name, price FROM service ORDER BY name, id LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(services)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM service")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Service>> {
    let service = sqlx::query_as::<_, Service>("SELECT id, name, price FROM service WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(service)
}

pub async fn create(pool: &SqlitePool, data: ServiceCreate) -> RepoResult<Service> {
    let service = sqlx::query_as::<_, Service>(
        "INSERT INTO service (name, price) VALUES (?1, ?2) RETURNING id, name, price",
    )
    .bind(&data.name)
    .bind(data.price)
    .fetch_one(pool)
    .await?;
    Ok(service)
}

pub async fn update(pool: &SqlitePool, id: i64, data: ServiceUpdate) -> RepoResult<Service> {
    sqlx::query_as::<_, Service>(
        "UPDATE service SET name = COALESCE(?1, name), price = COALESCE(?2, price) WHERE id = ?3 RETURNING id, name, price",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Service {id} not found")))
}

/// Hard delete; blocked while guest service lines reference it
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM service WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| RepoError::from(e).on_delete(|| format!("Service {id} is in use")))?;
    Ok(rows.rows_affected() > 0)
}
