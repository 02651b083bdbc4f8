//! Item repository
//!
//! Item CRUD plus the eager category-name join for listing.

use sqlx::{Row, SqlitePool};

use super::DbError;
use crate::models::ItemName;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Item with its associated category names, for list display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemWithCategories {
    pub id: i64,
    pub name: String,
    pub categories: Vec<String>,
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new item and return it with its fresh id.
    pub async fn create(&self, name: ItemName) -> Result<Item, DbError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// List items with their category names resolved eagerly.
    ///
    /// Single LEFT JOIN query ordered by item id; grouping happens in
    /// one pass over the rows, so no per-item lookups are issued.
    pub async fn list(&self) -> Result<Vec<ItemWithCategories>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT i.id, i.name, c.name AS category_name
            FROM items i
            LEFT JOIN item_categories ic ON ic.item_id = i.id
            LEFT JOIN categories c ON c.id = ic.category_id
            ORDER BY i.id, c.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let mut items: Vec<ItemWithCategories> = Vec::new();
        for row in rows {
            let id: i64 = row.get("id");
            if items.last().map_or(true, |last| last.id != id) {
                items.push(ItemWithCategories {
                    id,
                    name: row.get("name"),
                    categories: Vec::new(),
                });
            }
            if let Some(category) = row.get::<Option<String>, _>("category_name") {
                if let Some(current) = items.last_mut() {
                    current.categories.push(category);
                }
            }
        }

        Ok(items)
    }

    /// Replace an item's name, leaving id and associations untouched.
    pub async fn update(&self, id: i64, name: ItemName) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = ?1 WHERE id = ?2 RETURNING id, name",
        )
        .bind(name.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "item",
            id,
        })
    }

    /// Delete an item; its association rows go with it via cascade.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "item",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};

    async fn test_pool() -> SqlitePool {
        let pool = create_memory_pool().await.expect("memory pool");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    fn name(s: &str) -> ItemName {
        ItemName::new(s).expect("valid name")
    }

    #[tokio::test]
    async fn create_then_list() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let item = repo.create(name("Widget")).await.expect("create");
        assert_eq!(item.name, "Widget");

        let items = repo.list().await.expect("list");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, item.id);
        assert_eq!(items[0].name, "Widget");
        assert!(items[0].categories.is_empty());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        repo.create(name("first")).await.expect("create");
        repo.create(name("second")).await.expect("create");
        repo.create(name("third")).await.expect("create");

        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn update_replaces_name_in_place() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let item = repo.create(name("Widget")).await.expect("create");
        let updated = repo.update(item.id, name("Gadget")).await.expect("update");
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "Gadget");

        // Repeating the same update is observationally a no-op.
        let again = repo.update(item.id, name("Gadget")).await.expect("update");
        assert_eq!(again, updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let err = repo.update(999, name("Gadget")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "item", id: 999 }));
    }

    #[tokio::test]
    async fn delete_removes_item() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let item = repo.create(name("Widget")).await.expect("create");
        repo.delete(item.id).await.expect("delete");

        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let err = repo.delete(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "item", id: 42 }));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let first = repo.create(name("Widget")).await.expect("create");
        repo.delete(first.id).await.expect("delete");

        let second = repo.create(name("Gadget")).await.expect("create");
        assert!(second.id > first.id);
    }
}
