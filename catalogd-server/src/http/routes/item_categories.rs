//! Association endpoint - attaches categories to items

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{ItemCategory, ItemCategoryRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create association request
#[derive(Deserialize)]
pub struct ItemCategoryRequest {
    pub item_id: i64,
    pub category_id: i64,
}

/// Association response
#[derive(Serialize)]
pub struct ItemCategoryResponse {
    pub item_id: i64,
    pub category_id: i64,
}

impl From<ItemCategory> for ItemCategoryResponse {
    fn from(link: ItemCategory) -> Self {
        Self {
            item_id: link.item_id,
            category_id: link.category_id,
        }
    }
}

/// POST /itemcategory - attach a category to an item
///
/// Repeating an existing pair returns 409 rather than silently
/// succeeding.
async fn create_item_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItemCategoryRequest>,
) -> Result<(StatusCode, Json<ItemCategoryResponse>), ApiError> {
    let link = ItemCategoryRepo::new(&state.pool)
        .create(req.item_id, req.category_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Association routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/itemcategory", post(create_item_category))
}
