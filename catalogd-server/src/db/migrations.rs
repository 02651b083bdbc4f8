//! Database migrations for the catalog tables

use sqlx::SqlitePool;

/// Run all catalog migrations.
///
/// Statements are idempotent (`IF NOT EXISTS`), so this is safe to run
/// on every startup. AUTOINCREMENT keeps deleted ids from being reused.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running catalog migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Join table; cascade removes rows when either side is deleted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS item_categories (
            item_id INTEGER NOT NULL REFERENCES items(id) ON DELETE CASCADE,
            category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            PRIMARY KEY (item_id, category_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Catalog migrations complete");
    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // The composite primary key already covers item_id lookups; the
    // category side needs its own index for cascades and joins.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_item_categories_category ON item_categories(category_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
