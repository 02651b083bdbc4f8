//! Category repository

use std::collections::BTreeMap;

use sqlx::SqlitePool;

use super::DbError;
use crate::models::CategoryName;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new category and return it with its fresh id.
    pub async fn create(&self, name: CategoryName) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// List categories as an id-to-name map.
    ///
    /// A BTreeMap keeps the output sorted by id and serializes as a
    /// JSON object keyed by id.
    pub async fn list(&self) -> Result<BTreeMap<i64, String>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
    }

    /// Delete a category; its association rows go with it via cascade.
    /// Items that carried the category survive untouched.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "category",
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

    fn name(s: &str) -> CategoryName {
        CategoryName::new(s).expect("valid name")
    }

    #[tokio::test]
    async fn create_then_list() {
        let pool = test_pool().await;
        let repo = CategoryRepo::new(&pool);

        let hardware = repo.create(name("Hardware")).await.expect("create");
        let software = repo.create(name("Software")).await.expect("create");

        let listed = repo.list().await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.get(&hardware.id), Some(&"Hardware".to_owned()));
        assert_eq!(listed.get(&software.id), Some(&"Software".to_owned()));
    }

    #[tokio::test]
    async fn delete_removes_category() {
        let pool = test_pool().await;
        let repo = CategoryRepo::new(&pool);

        let category = repo.create(name("Hardware")).await.expect("create");
        repo.delete(category.id).await.expect("delete");

        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = CategoryRepo::new(&pool);

        let err = repo.delete(7).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "category",
                id: 7
            }
        ));
    }
}
