//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses JOINs for list operations (no N+1)
//! - Lets DB constraints enforce uniqueness and referential integrity
//! - Uses transactions for multi-step operations

pub mod categories;
pub mod item_categories;
pub mod items;

pub use categories::{Category, CategoryRepo};
pub use item_categories::{ItemCategory, ItemCategoryRepo};
pub use items::{Item, ItemRepo, ItemWithCategories};

/// Database error type shared by all repositories
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },

    #[error("conflict: {resource} {id} already exists")]
    Conflict { resource: &'static str, id: String },
}
