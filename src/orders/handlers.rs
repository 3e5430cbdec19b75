use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

use super::dto::{CreateOrderRequest, OrderResponse};
use super::repo::NewOrder;
use super::services::{validate, verify_totals};

#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let errors = validate(&payload);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    verify_totals(state.catalog.as_ref(), &state.config.pricing, &payload).await?;

    let order = state
        .orders
        .create_order(NewOrder {
            subtotal: payload.subtotal,
            tax: payload.tax,
            delivery: payload.delivery,
            total: payload.total,
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
        })
        .await?;

    let mut items = Vec::with_capacity(payload.items.len());
    for item in &payload.items {
        items.push(
            state
                .orders
                .create_order_item(order.id, item.product_id, item.quantity, item.price)
                .await?,
        );
    }

    info!(order_id = order.id, total = order.total, "order created");
    Ok((StatusCode::CREATED, Json(OrderResponse { order, items })))
}

#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, ApiError> {
    let Some(order) = state.orders.order(id).await? else {
        return Err(ApiError::NotFound("Order"));
    };
    let items = state.orders.items_for_order(order.id).await?;
    Ok(Json(OrderResponse { order, items }))
}
