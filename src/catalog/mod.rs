pub mod dto;
pub mod handlers;
pub mod repo;
mod seed;
pub mod services;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/categories/:slug", get(handlers::get_category))
        .route("/products", get(handlers::list_products))
        .route("/products/category/:slug", get(handlers::products_by_category))
        .route("/products/:slug", get(handlers::get_product))
}
