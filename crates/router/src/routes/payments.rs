use actix_web::{web, HttpRequest, HttpResponse};
use connector_interfaces::webhooks::CallbackParameters;
use router_env::{instrument, tracing, Flow};

use super::app::AppState;
use crate::{
    core::payments::{self, PaymentAction, PaymentsRequest},
    services::api,
};

#[instrument(skip_all, fields(flow = ?Flow::PaymentFormGenerate))]
pub async fn payments_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (provider, order_number) = path.into_inner();
    Box::pin(api::server_wrap(
        Flow::PaymentFormGenerate,
        state,
        &req,
        PaymentsRequest {
            provider,
            order_number,
        },
        payments::payments_form,
    ))
    .await
}

/// Gateway callback; the query string is verified as received
#[instrument(skip_all, fields(flow = ?Flow::PaymentCallback))]
pub async fn payments_callback(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (provider, order_number) = path.into_inner();
    let parameters = CallbackParameters::from_query(req.query_string());
    Box::pin(api::server_wrap(
        Flow::PaymentCallback,
        state,
        &req,
        (
            PaymentsRequest {
                provider,
                order_number,
            },
            parameters,
        ),
        |state, (request, parameters)| payments::payments_callback(state, request, parameters),
    ))
    .await
}

#[instrument(skip_all, fields(flow = ?Flow::PaymentStatusSync))]
pub async fn payments_sync(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    payments_action(state, req, path, Flow::PaymentStatusSync, PaymentAction::Sync).await
}

#[instrument(skip_all, fields(flow = ?Flow::PaymentCapture))]
pub async fn payments_capture(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    payments_action(state, req, path, Flow::PaymentCapture, PaymentAction::Capture).await
}

#[instrument(skip_all, fields(flow = ?Flow::PaymentCancel))]
pub async fn payments_cancel(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    payments_action(state, req, path, Flow::PaymentCancel, PaymentAction::Cancel).await
}

#[instrument(skip_all, fields(flow = ?Flow::PaymentRefund))]
pub async fn payments_refund(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    payments_action(state, req, path, Flow::PaymentRefund, PaymentAction::Refund).await
}

async fn payments_action(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    flow: Flow,
    action: PaymentAction,
) -> HttpResponse {
    let (provider, order_number) = path.into_inner();
    Box::pin(api::server_wrap(
        flow,
        state,
        &req,
        PaymentsRequest {
            provider,
            order_number,
        },
        |state, request| payments::payments_operation(state, request, action),
    ))
    .await
}
