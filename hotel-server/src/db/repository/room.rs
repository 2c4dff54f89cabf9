//! Room Repository
//!
//! Rows are returned joined with their room type name.

use super::{RepoError, RepoResult};
use shared::models::{Room, RoomCreate, RoomStatus, RoomUpdate};
use sqlx::SqlitePool;

const ROOM_SELECT: &str = "SELECT r.id, r.room_number, r.room_type_id, t.name AS room_type_name, r.floor, r.status FROM room r JOIN room_type t ON t.id = r.room_type_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Room>> {
    let sql = format!("{ROOM_SELECT} ORDER BY r.floor, r.room_number");
    let rooms = sqlx::query_as::<_, Room>(&sql).fetch_all(pool).await?;
    Ok(rooms)
}

pub async fn find_page(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<Room>> {
    let sql = format!("{ROOM_SELECT} ORDER BY r.floor, r.room_number LIMIT ? OFFSET ?");
    let rooms = sqlx::query_as::<_, Room>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(rooms)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM room")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Room>> {
    let sql = format!("{ROOM_SELECT} WHERE r.id = ?");
    let room = sqlx::query_as::<_, Room>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(room)
}

pub async fn find_by_number(pool: &SqlitePool, room_number: &str) -> RepoResult<Option<Room>> {
    let sql = format!("{ROOM_SELECT} WHERE r.room_number = ? LIMIT 1");
    let room = sqlx::query_as::<_, Room>(&sql)
        .bind(room_number)
        .fetch_optional(pool)
        .await?;
    Ok(room)
}

pub async fn find_by_status(pool: &SqlitePool, status: RoomStatus) -> RepoResult<Vec<Room>> {
    let sql = format!("{ROOM_SELECT} WHERE r.status = ? ORDER BY r.floor, r.room_number");
    let rooms = sqlx::query_as::<_, Room>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?;
    Ok(rooms)
}

pub async fn find_by_room_type(pool: &SqlitePool, room_type_id: i64) -> RepoResult<Vec<Room>> {
    let sql = format!("{ROOM_SELECT} WHERE r.room_type_id = ? ORDER BY r.floor, r.room_number");
    let rooms = sqlx::query_as::<_, Room>(&sql)
        .bind(room_type_id)
        .fetch_all(pool)
        .await?;
    Ok(rooms)
}

pub async fn create(pool: &SqlitePool, data: RoomCreate) -> RepoResult<Room> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO room (room_number, room_type_id, floor, status) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(&data.room_number)
    .bind(data.room_type_id)
    .bind(data.floor)
    .bind(data.status.unwrap_or_default())
    .fetch_one(pool)
    .await
    .map_err(|e| room_conflict(e, &data.room_number))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create room".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: RoomUpdate) -> RepoResult<Room> {
    let rows = sqlx::query(
        "UPDATE room SET room_number = COALESCE(?1, room_number), room_type_id = COALESCE(?2, room_type_id), floor = COALESCE(?3, floor), status = COALESCE(?4, status) WHERE id = ?5",
    )
    .bind(&data.room_number)
    .bind(data.room_type_id)
    .bind(data.floor)
    .bind(data.status)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| room_conflict(e, data.room_number.as_deref().unwrap_or_default()))?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Room {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Room {id} not found")))
}

/// Set the operational status; any status may follow any other
pub async fn set_status(pool: &SqlitePool, id: i64, status: RoomStatus) -> RepoResult<Room> {
    update(
        pool,
        id,
        RoomUpdate {
            status: Some(status),
            ..Default::default()
        },
    )
    .await
}

/// Hard delete; blocked while bookings reference the room
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM room WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| RepoError::from(e).on_delete(|| format!("Room {id} has bookings")))?;
    Ok(rows.rows_affected() > 0)
}

fn room_conflict(err: sqlx::Error, room_number: &str) -> RepoError {
    match RepoError::from(err) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Room number '{room_number}' already exists"))
        }
        RepoError::InvalidReference(msg) => {
            RepoError::InvalidReference(format!("Unknown room type: {msg}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::room_type;
    use crate::db::test_pool;
    use shared::models::{Money, RoomTypeCreate};

    async fn seed_type(pool: &SqlitePool, name: &str) -> i64 {
        room_type::create(
            pool,
            RoomTypeCreate {
                name: name.to_string(),
                description: None,
                base_price: Money::from(4000),
                max_guests: 2,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn room(number: &str, room_type_id: i64) -> RoomCreate {
        RoomCreate {
            room_number: number.to_string(),
            room_type_id,
            floor: 1,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_joins_type_and_defaults_status() {
        let pool = test_pool().await;
        let type_id = seed_type(&pool, "Deluxe").await;
        let created = create(&pool, room("101", type_id)).await.unwrap();

        assert_eq!(created.status, RoomStatus::Available);
        assert_eq!(created.room_type_name, "Deluxe");
        assert_eq!(created.to_string(), "№101 (Deluxe)");
    }

    #[tokio::test]
    async fn test_page_follows_floor_order() {
        let pool = test_pool().await;
        let type_id = seed_type(&pool, "Standard").await;
        for (number, floor) in [("301", 3), ("101", 1), ("201", 2)] {
            create(&pool, RoomCreate { floor, ..room(number, type_id) })
                .await
                .unwrap();
        }

        let second: Vec<String> = find_page(&pool, 2, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.room_number)
            .collect();
        assert_eq!(second, vec!["301"]);
        assert_eq!(count(&pool).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_room_number() {
        let pool = test_pool().await;
        let type_id = seed_type(&pool, "Standard").await;
        create(&pool, room("101", type_id)).await.unwrap();

        let err = create(&pool, room("101", type_id)).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(msg) if msg.contains("101")));
    }

    #[tokio::test]
    async fn test_unknown_room_type_is_invalid_reference() {
        let pool = test_pool().await;
        let err = create(&pool, room("101", 999)).await.unwrap_err();
        assert!(matches!(err, RepoError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn test_room_type_delete_is_protected() {
        let pool = test_pool().await;
        let type_id = seed_type(&pool, "Suite").await;
        let created = create(&pool, room("501", type_id)).await.unwrap();

        let err = room_type::delete(&pool, type_id).await.unwrap_err();
        assert!(matches!(err, RepoError::Protected(_)));
        assert!(find_by_id(&pool, created.id).await.unwrap().is_some());

        assert!(delete(&pool, created.id).await.unwrap());
        assert!(room_type::delete(&pool, type_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_any_status_transition_allowed() {
        let pool = test_pool().await;
        let type_id = seed_type(&pool, "Standard").await;
        let created = create(&pool, room("102", type_id)).await.unwrap();

        for status in [
            RoomStatus::Maintenance,
            RoomStatus::Occupied,
            RoomStatus::Available,
            RoomStatus::Cleaning,
        ] {
            let updated = set_status(&pool, created.id, status).await.unwrap();
            assert_eq!(updated.status, status);
        }

        let cleaning = find_by_status(&pool, RoomStatus::Cleaning).await.unwrap();
        assert_eq!(cleaning.len(), 1);
        assert!(find_by_status(&pool, RoomStatus::Available).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_number_and_type() {
        let pool = test_pool().await;
        let standard = seed_type(&pool, "Standard").await;
        let suite = seed_type(&pool, "Suite").await;
        create(&pool, room("101", standard)).await.unwrap();
        create(&pool, room("102", standard)).await.unwrap();
        create(&pool, room("501", suite)).await.unwrap();

        assert_eq!(find_by_room_type(&pool, standard).await.unwrap().len(), 2);
        let found = find_by_number(&pool, "501").await.unwrap().unwrap();
        assert_eq!(found.room_type_id, suite);
        assert!(find_by_number(&pool, "999").await.unwrap().is_none());
    }
}
