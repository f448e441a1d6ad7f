//! Product CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use catalog_core::catalog::{CreateProductRequest, Product, UpdateProductRequest};

use crate::{handlers::AppError, state::AppState};

/// List all products with their categories (GET /api/v1/products).
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product_usecase.get_all().await?;
    Ok(Json(products))
}

/// Create a product (POST /api/v1/products).
///
/// Rejects an empty name or a negative price with 400 before touching storage.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(payload) = payload.map_err(AppError::bad_request)?;
    payload.validate()?;

    let product = state
        .product_usecase
        .create(payload.into_product())
        .await?;

    tracing::info!(
        product_id = product.id,
        category_id = product.category_id,
        "Created product"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product (GET /api/v1/products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id.map_err(AppError::bad_request)?;
    let product = state.product_usecase.get_by_id(id).await?;
    Ok(Json(product))
}

/// Replace a product's fields (PUT or PATCH /api/v1/products/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id.map_err(AppError::bad_request)?;
    let Json(payload) = payload.map_err(AppError::bad_request)?;
    payload.validate()?;

    let product = state
        .product_usecase
        .update(payload.into_product(id))
        .await?;

    tracing::info!(product_id = id, price = product.price, "Updated product");
    Ok(Json(product))
}

/// Delete a product (DELETE /api/v1/products/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = id.map_err(AppError::bad_request)?;
    state.product_usecase.delete(id).await?;

    tracing::info!(product_id = id, "Deleted product");
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
