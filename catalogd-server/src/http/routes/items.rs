//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::DeletedResponse;
use crate::db::repos::{Item, ItemRepo, ItemWithCategories};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ItemName;

/// Create/update item request
#[derive(Deserialize)]
pub struct ItemRequest {
    pub name: String,
}

/// Item response without associations
#[derive(Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
}

impl From<Item> for ItemResponse {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            name: i.name,
        }
    }
}

/// Item response with resolved category names
#[derive(Serialize)]
pub struct ItemWithCategoriesResponse {
    pub id: i64,
    pub name: String,
    pub categories: Vec<String>,
}

impl From<ItemWithCategories> for ItemWithCategoriesResponse {
    fn from(i: ItemWithCategories) -> Self {
        Self {
            id: i.id,
            name: i.name,
            categories: i.categories,
        }
    }
}

/// GET /items - list all items with their category names
async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemWithCategoriesResponse>>, ApiError> {
    let items = ItemRepo::new(&state.pool).list().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// POST /items - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let name = ItemName::new(&req.name)?;
    let item = ItemRepo::new(&state.pool).create(name).await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// PUT /items/{id} - rename an item
async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let name = ItemName::new(&req.name)?;
    let item = ItemRepo::new(&state.pool).update(id, name).await?;

    Ok(Json(item.into()))
}

/// DELETE /items/{id} - remove an item and its associations
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    ItemRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse { deleted: id }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
}
