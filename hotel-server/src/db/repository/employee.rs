//! Employee Repository
//!
//! Staff accounts are never hard-deleted: `delete` clears `is_active`.

use super::{RepoError, RepoResult};
use crate::utils::password;
use shared::models::{Employee, EmployeeCreate, EmployeeRole, EmployeeUpdate};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT id, username, full_name, hash_pass, role, phone, email, is_active, date_joined FROM employee";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE is_active = 1 ORDER BY username");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_all_with_inactive(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY username");
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

/// One admin list page, deactivated accounts included
pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY username LIMIT ? OFFSET ?");
    let employees = sqlx::query_as::<_, Employee>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE username = ? LIMIT 1");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let hash_pass = password::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
    let role = data.role.unwrap_or_default();
    let now = chrono::Utc::now();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (username, full_name, hash_pass, role, phone, email, is_active, date_joined) VALUES (?1, ?2, ?3, ?4, NULLIF(?5, ''), NULLIF(?6, ''), 1, ?7) RETURNING id",
    )
    .bind(&data.username)
    .bind(&data.full_name)
    .bind(&hash_pass)
    .bind(role)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Username '{}' already exists", data.username))
        }
        other => other,
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let hash_pass = match data.password.as_deref() {
        Some(password) => Some(
            password::hash_password(password)
                .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?,
        ),
        None => None,
    };

    let rows = sqlx::query(
        "UPDATE employee SET username = COALESCE(?1, username), full_name = COALESCE(?2, full_name), hash_pass = COALESCE(?3, hash_pass), role = COALESCE(?4, role), phone = CASE WHEN ?5 IS NULL THEN phone ELSE NULLIF(?5, '') END, email = CASE WHEN ?6 IS NULL THEN email ELSE NULLIF(?6, '') END, is_active = COALESCE(?7, is_active) WHERE id = ?8",
    )
    .bind(&data.username)
    .bind(&data.full_name)
    .bind(&hash_pass)
    .bind(data.role)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Deactivate an employee; returns false when already inactive or missing
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE employee SET is_active = 0 WHERE id = ? AND is_active = 1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Create an administrator account unless the username is already taken
///
/// Returns the new account, or `None` when one already existed.
pub async fn ensure_admin(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    full_name: &str,
) -> RepoResult<Option<Employee>> {
    if find_by_username(pool, username).await?.is_some() {
        return Ok(None);
    }
    let created = create(
        pool,
        EmployeeCreate {
            username: username.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            role: Some(EmployeeRole::Admin),
            phone: None,
            email: None,
        },
    )
    .await?;
    Ok(Some(created))
}
