use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::instrument;

use crate::{
    error::ApiError,
    state::AppState,
};

use super::dto::{ProductDetails, ProductQuery};
use super::repo::{Category, Product};
use super::services::{filter_dietary, sort_products};

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.catalog.list_categories().await?;
    Ok(Json(categories))
}

#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Category>, ApiError> {
    state
        .catalog
        .category_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Category"))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let mut products = match query.category.as_deref() {
        Some(slug) => state.catalog.products_by_category_slug(slug).await?,
        None => state.catalog.list_products().await?,
    };

    if let Some(dietary) = query.dietary.as_deref() {
        products = filter_dietary(products, dietary);
    }
    if let Some(sort) = query.sort.as_deref() {
        sort_products(&mut products, sort);
    }

    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.products_by_category_slug(&slug).await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetails>, ApiError> {
    let Some(product) = state.catalog.product_by_slug(&slug).await? else {
        return Err(ApiError::NotFound("Product"));
    };

    let category = state
        .catalog
        .list_categories()
        .await?
        .into_iter()
        .find(|c| c.id == product.category_id);

    Ok(Json(ProductDetails { product, category }))
}
