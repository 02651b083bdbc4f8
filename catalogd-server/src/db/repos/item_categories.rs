//! Item-category association repository
//!
//! Only creation is exposed. Association rows disappear via cascade
//! when either side is deleted; there is no single-row removal.

use sqlx::SqlitePool;

use super::DbError;

/// A single item-category pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCategory {
    pub item_id: i64,
    pub category_id: i64,
}

/// Association repository
pub struct ItemCategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemCategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Link an item to a category.
    ///
    /// Both sides must already exist; a duplicate pair is a conflict.
    /// The existence checks and the insert share one transaction so a
    /// concurrent delete cannot slip between them.
    pub async fn create(
        &self,
        item_id: i64,
        category_id: i64,
    ) -> Result<ItemCategory, DbError> {
        let mut tx = self.pool.begin().await?;

        let item_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1)")
                .bind(item_id)
                .fetch_one(&mut *tx)
                .await?;
        if !item_exists {
            return Err(DbError::NotFound {
                resource: "item",
                id: item_id,
            });
        }

        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)")
                .bind(category_id)
                .fetch_one(&mut *tx)
                .await?;
        if !category_exists {
            return Err(DbError::NotFound {
                resource: "category",
                id: category_id,
            });
        }

        let inserted = sqlx::query(
            "INSERT INTO item_categories (item_id, category_id) VALUES (?1, ?2) \
             ON CONFLICT (item_id, category_id) DO NOTHING",
        )
        .bind(item_id)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() == 0 {
            return Err(DbError::Conflict {
                resource: "item-category pair",
                id: format!("({item_id}, {category_id})"),
            });
        }

        tx.commit().await?;

        Ok(ItemCategory {
            item_id,
            category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{CategoryRepo, ItemRepo};
    use crate::db::{create_memory_pool, migrations};
    use crate::models::{CategoryName, ItemName};

    async fn test_pool() -> SqlitePool {
        let pool = create_memory_pool().await.expect("memory pool");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    async fn seed(pool: &SqlitePool) -> (i64, i64) {
        let item = ItemRepo::new(pool)
            .create(ItemName::new("Widget").expect("valid"))
            .await
            .expect("create item");
        let category = CategoryRepo::new(pool)
            .create(CategoryName::new("Hardware").expect("valid"))
            .await
            .expect("create category");
        (item.id, category.id)
    }

    #[tokio::test]
    async fn associate_shows_up_in_item_listing() {
        let pool = test_pool().await;
        let (item_id, category_id) = seed(&pool).await;

        ItemCategoryRepo::new(&pool)
            .create(item_id, category_id)
            .await
            .expect("associate");

        let items = ItemRepo::new(&pool).list().await.expect("list");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].categories, ["Hardware"]);
    }

    #[tokio::test]
    async fn missing_item_is_not_found() {
        let pool = test_pool().await;
        let (_, category_id) = seed(&pool).await;

        let err = ItemCategoryRepo::new(&pool)
            .create(999, category_id)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "item", id: 999 }));
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let pool = test_pool().await;
        let (item_id, _) = seed(&pool).await;

        let err = ItemCategoryRepo::new(&pool)
            .create(item_id, 999)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "category",
                id: 999
            }
        ));
    }

    #[tokio::test]
    async fn duplicate_pair_is_conflict() {
        let pool = test_pool().await;
        let (item_id, category_id) = seed(&pool).await;

        let repo = ItemCategoryRepo::new(&pool);
        repo.create(item_id, category_id).await.expect("first link");

        let err = repo.create(item_id, category_id).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
    }

    #[tokio::test]
    async fn deleting_item_cascades_associations() {
        let pool = test_pool().await;
        let (item_id, category_id) = seed(&pool).await;

        ItemCategoryRepo::new(&pool)
            .create(item_id, category_id)
            .await
            .expect("associate");
        ItemRepo::new(&pool).delete(item_id).await.expect("delete item");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM item_categories")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 0);

        // The category itself survives.
        let categories = CategoryRepo::new(&pool).list().await.expect("list");
        assert_eq!(categories.len(), 1);
    }

    #[tokio::test]
    async fn deleting_category_detaches_all_items() {
        let pool = test_pool().await;
        let category = CategoryRepo::new(&pool)
            .create(CategoryName::new("Hardware").expect("valid"))
            .await
            .expect("create category");

        let item_repo = ItemRepo::new(&pool);
        let link_repo = ItemCategoryRepo::new(&pool);
        for name in ["bolt", "nut", "washer"] {
            let item = item_repo
                .create(ItemName::new(name).expect("valid"))
                .await
                .expect("create item");
            link_repo
                .create(item.id, category.id)
                .await
                .expect("associate");
        }

        CategoryRepo::new(&pool)
            .delete(category.id)
            .await
            .expect("delete category");

        let items = item_repo.list().await.expect("list");
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.categories.is_empty()));
    }
}
