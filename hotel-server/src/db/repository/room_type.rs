//! Room Type Repository

use super::{RepoError, RepoResult};
use shared::models::{RoomType, RoomTypeCreate, RoomTypeUpdate};
use sqlx::SqlitePool;

const ROOM_TYPE_SELECT: &str =
    "SELECT id, name, description, base_price, max_guests FROM room_type";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<RoomType>> {
    let sql = format!("{ROOM_TYPE_SELECT} ORDER BY name, id");
    let room_types = sqlx::query_as::<_, RoomType>(&sql).fetch_all(pool).await?;
    Ok(room_types)
}

pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<RoomType>> {
    let sql = format!("{ROOM_TYPE_SELECT} ORDER BY name, id LIMIT ? OFFSET ?");
    let room_types = sqlx::query_as::<_, RoomType>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(room_types)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room_type")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<RoomType>> {
    let sql = format!("{ROOM_TYPE_SELECT} WHERE id = ?");
    let room_type = sqlx::query_as::<_, RoomType>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(room_type)
}

pub async fn create(pool: &SqlitePool, data: RoomTypeCreate) -> RepoResult<RoomType> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO room_type (name, description, base_price, max_guests) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.description.as_deref().unwrap_or_default())
    .bind(data.base_price)
    .bind(data.max_guests)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create room type".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: RoomTypeUpdate) -> RepoResult<RoomType> {
    let rows = sqlx::query(
        "UPDATE room_type SET name = COALESCE(?1, name), description = COALESCE(?2, description), base_price = COALESCE(?3, base_price), max_guests = COALESCE(?4, max_guests) WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.base_price)
    .bind(data.max_guests)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Room type {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Room type {id} not found")))
}

/// Hard delete; blocked while any room uses this type
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM room_type WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            RepoError::from(e).on_delete(|| format!("Room type {id} is assigned to rooms"))
        })?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use shared::models::Money;

    fn standard() -> RoomTypeCreate {
        RoomTypeCreate {
            name: "Standard".to_string(),
            description: None,
            base_price: Money::new(350000, 2),
            max_guests: 2,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_description() {
        let pool = test_pool().await;
        let room_type = create(&pool, standard()).await.unwrap();
        assert_eq!(room_type.description, "");
        assert_eq!(room_type.base_price, Money::new(350000, 2));
        assert_eq!(room_type.max_guests, 2);
    }

    #[tokio::test]
    async fn test_price_is_exact() {
        let pool = test_pool().await;
        let room_type = create(
            &pool,
            RoomTypeCreate {
                base_price: "0.10".parse().unwrap(),
                ..standard()
            },
        )
        .await
        .unwrap();

        let stored: String = sqlx::query_scalar("SELECT base_price FROM room_type WHERE id = ?")
            .bind(room_type.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, "0.10");
        assert_eq!(room_type.base_price.to_string(), "0.10");
    }

    #[tokio::test]
    async fn test_partial_update() {
        let pool = test_pool().await;
        let room_type = create(&pool, standard()).await.unwrap();
        let updated = update(
            &pool,
            room_type.id,
            RoomTypeUpdate {
                description: Some("City view".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Standard");
        assert_eq!(updated.description, "City view");
    }

    #[tokio::test]
    async fn test_names_need_not_be_unique() {
        let pool = test_pool().await;
        create(&pool, standard()).await.unwrap();
        create(&pool, standard()).await.unwrap();
        assert_eq!(find_all(&pool).await.unwrap().len(), 2);
    }
}
