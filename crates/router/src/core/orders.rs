use domain_models::orders::OrderReadOnly;
use router_env::{instrument, tracing};

use crate::{
    core::errors::{self, RouterResponse, StorageErrorExt},
    routes::AppState,
    services::api::ApplicationResponse,
};

#[instrument(skip_all, fields(order_number = %order.order_number))]
pub async fn create_order(state: AppState, order: OrderReadOnly) -> RouterResponse<OrderReadOnly> {
    if order.order_number.trim().is_empty() {
        return Err(errors::ApiErrorResponse::InvalidRequestData {
            message: "order_number must not be empty".to_string(),
        }
        .into());
    }

    let order_number = order.order_number.clone();
    let order = state
        .store
        .insert_order(order)
        .await
        .to_duplicate_response(errors::ApiErrorResponse::DuplicateOrder { order_number })?;

    Ok(ApplicationResponse::Json(order))
}

#[instrument(skip_all)]
pub async fn retrieve_order(state: AppState, order_number: String) -> RouterResponse<OrderReadOnly> {
    let order = state
        .store
        .find_order_by_order_number(&order_number)
        .await
        .to_not_found_response(errors::ApiErrorResponse::OrderNotFound)?;

    Ok(ApplicationResponse::Json(order))
}
