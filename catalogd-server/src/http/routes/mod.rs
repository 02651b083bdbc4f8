//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod item_categories;
pub mod items;

use serde::Serialize;

/// Acknowledgment body for delete endpoints
#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}
