//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::DeletedResponse;
use crate::db::repos::{Category, CategoryRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::CategoryName;

/// Create category request
#[derive(Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Category response
#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// GET /categories - id-to-name map of all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<i64, String>>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(categories))
}

/// POST /categories - create a new category
async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let name = CategoryName::new(&req.name)?;
    let category = CategoryRepo::new(&state.pool).create(name).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// DELETE /categories/{id} - remove a category, detaching its items
async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    CategoryRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse { deleted: id }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
}
