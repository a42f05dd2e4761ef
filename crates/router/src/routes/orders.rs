use actix_web::{web, HttpRequest, HttpResponse};
use domain_models::orders::OrderReadOnly;
use router_env::{instrument, tracing, Flow};

use super::app::AppState;
use crate::{core::orders, services::api};

/// Registers an order snapshot with the host store
#[instrument(skip_all, fields(flow = ?Flow::OrderCreate))]
pub async fn orders_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    json_payload: web::Json<OrderReadOnly>,
) -> HttpResponse {
    Box::pin(api::server_wrap(
        Flow::OrderCreate,
        state,
        &req,
        json_payload.into_inner(),
        orders::create_order,
    ))
    .await
}

#[instrument(skip_all, fields(flow = ?Flow::OrderRetrieve))]
pub async fn orders_retrieve(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    Box::pin(api::server_wrap(
        Flow::OrderRetrieve,
        state,
        &req,
        path.into_inner(),
        orders::retrieve_order,
    ))
    .await
}
