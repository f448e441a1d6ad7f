//! Category CRUD handlers.
//!
//! Payloads are validated here; only valid requests reach the usecase.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use catalog_core::catalog::{Category, CreateCategoryRequest, UpdateCategoryRequest};

use crate::{handlers::AppError, state::AppState};

/// List all categories (GET /api/v1/categories).
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.category_usecase.get_all().await?;
    Ok(Json(categories))
}

/// Create a category (POST /api/v1/categories).
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let Json(payload) = payload.map_err(AppError::bad_request)?;
    payload.validate()?;

    let category = state
        .category_usecase
        .create(payload.into_category())
        .await?;

    tracing::info!(category_id = category.id, name = %category.name, "Created category");
    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a category (GET /api/v1/categories/{id}).
pub async fn get_category(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Category>, AppError> {
    let Path(id) = id.map_err(AppError::bad_request)?;
    let category = state.category_usecase.get_by_id(id).await?;
    Ok(Json(category))
}

/// Replace a category's fields (PUT or PATCH /api/v1/categories/{id}).
pub async fn update_category(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<Json<Category>, AppError> {
    let Path(id) = id.map_err(AppError::bad_request)?;
    let Json(payload) = payload.map_err(AppError::bad_request)?;
    payload.validate()?;

    let category = state
        .category_usecase
        .update(payload.into_category(id))
        .await?;

    tracing::info!(category_id = id, "Updated category");
    Ok(Json(category))
}

/// Delete a category (DELETE /api/v1/categories/{id}).
pub async fn delete_category(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = id.map_err(AppError::bad_request)?;
    state.category_usecase.delete(id).await?;

    tracing::info!(category_id = id, "Deleted category");
    Ok(Json(json!({ "message": "Category deleted successfully" })))
}
