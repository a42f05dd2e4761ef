use common_utils::errors::CustomResult;
use connector_interfaces::webhooks::CallbackParameters;
use domain_models::{
    orders::OrderReadOnly,
    payments::{ApiResult, CallbackResult, CheckoutUrls, PaymentForm, TransactionInfo},
};
use error_stack::{report, ResultExt};
use payment_providers::{errors::ProviderError, BamboraProvider};
use router_env::{instrument, logger, tracing};

use crate::{
    core::errors::{self, ProviderErrorExt, RouterResponse, RouterResult, StorageErrorExt},
    db::OrderTransactionUpdate,
    routes::AppState,
    services::api::ApplicationResponse,
};

/// Provider alias and order number taken from the request path
#[derive(Debug, Clone)]
pub struct PaymentsRequest {
    pub provider: String,
    pub order_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PaymentAction {
    Sync,
    Capture,
    Cancel,
    Refund,
}

async fn find_order(state: &AppState, order_number: &str) -> RouterResult<OrderReadOnly> {
    state
        .store
        .find_order_by_order_number(order_number)
        .await
        .to_not_found_response(errors::ApiErrorResponse::OrderNotFound)
}

/// Where the gateway sends its callback for this order and provider
fn callback_url(base_url: &str, provider: &BamboraProvider, order_number: &str) -> String {
    format!(
        "{}/payments/{}/{}/callback",
        base_url.trim_end_matches('/'),
        provider.variant(),
        urlencoding::encode(order_number)
    )
}

fn checkout_urls(
    state: &AppState,
    provider: &BamboraProvider,
    order_number: &str,
) -> CustomResult<CheckoutUrls, ProviderError> {
    let settings = provider.settings();
    Ok(CheckoutUrls {
        continue_url: settings.get_continue_url()?.to_string(),
        cancel_url: settings.get_cancel_url()?.to_string(),
        callback_url: callback_url(&state.conf.server.base_url, provider, order_number),
    })
}

#[instrument(skip_all, fields(provider = %req.provider, order_number = %req.order_number))]
pub async fn payments_form(state: AppState, req: PaymentsRequest) -> RouterResponse<PaymentForm> {
    let provider = state.get_provider(&req.provider)?;
    let order = find_order(&state, &req.order_number).await?;

    let urls = checkout_urls(&state, provider, &order.order_number).to_api_error_response()?;
    let form = provider
        .generate_form(&order, &urls)
        .await
        .to_api_error_response()?;

    Ok(ApplicationResponse::Json(form))
}

#[instrument(skip_all, fields(provider = %req.provider, order_number = %req.order_number))]
pub async fn payments_callback(
    state: AppState,
    req: PaymentsRequest,
    parameters: CallbackParameters,
) -> RouterResponse<TransactionInfo> {
    // The gateway gets a bare 400 whatever is wrong with the callback
    let provider = state
        .get_provider(&req.provider)
        .change_context(errors::ApiErrorResponse::CallbackRejected)?;
    let order = find_order(&state, &req.order_number)
        .await
        .change_context(errors::ApiErrorResponse::CallbackRejected)?;

    match provider
        .process_callback(&order, &parameters)
        .await
        .to_api_error_response()?
    {
        CallbackResult::Ok { transaction_info } => {
            state
                .store
                .update_order_transaction_info(
                    &order.order_number,
                    OrderTransactionUpdate::Callback(transaction_info.clone()),
                )
                .await
                .change_context(errors::ApiErrorResponse::InternalServerError)?;
            logger::info!(
                transaction_id = %transaction_info.transaction_id,
                payment_status = %transaction_info.payment_status,
                "Callback applied to order"
            );
            Ok(ApplicationResponse::Json(transaction_info))
        }
        CallbackResult::BadRequest => Err(report!(errors::ApiErrorResponse::CallbackRejected)),
    }
}

/// Status fetch, capture, cancel or refund. An unsuccessful result is still a 200 carrying the
/// diagnostic; only successful results touch the stored order.
#[instrument(skip_all, fields(provider = %req.provider, order_number = %req.order_number, action = %action))]
pub async fn payments_operation(
    state: AppState,
    req: PaymentsRequest,
    action: PaymentAction,
) -> RouterResponse<ApiResult> {
    let provider = state.get_provider(&req.provider)?;
    let order = find_order(&state, &req.order_number).await?;

    let result = match action {
        PaymentAction::Sync => provider.fetch_payment_status(&order).await,
        PaymentAction::Capture => provider.capture_payment(&order).await,
        PaymentAction::Cancel => provider.cancel_payment(&order).await,
        PaymentAction::Refund => provider.refund_payment(&order).await,
    }
    .to_api_error_response()?;

    if let Some(update) = result.transaction_info.as_ref().filter(|_| result.success) {
        state
            .store
            .update_order_transaction_info(
                &order.order_number,
                OrderTransactionUpdate::StatusUpdate(update.clone()),
            )
            .await
            .change_context(errors::ApiErrorResponse::InternalServerError)?;
    }

    Ok(ApplicationResponse::Json(result))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use payment_providers::ProviderVariant;

    use super::*;
    use crate::configs::settings::Settings;

    #[test]
    fn callback_url_encodes_order_number() {
        let state = AppState::new(Settings::default()).unwrap();
        let provider = state
            .get_provider(&ProviderVariant::Checkout.to_string())
            .unwrap();

        assert_eq!(
            callback_url("https://shop.example/", provider, "#A-1002"),
            "https://shop.example/payments/bambora-checkout/%23A-1002/callback"
        );
    }

    #[test]
    fn unknown_provider_is_not_found() {
        let state = AppState::new(Settings::default()).unwrap();

        let error = state.get_provider("stripe").err().unwrap();

        assert_eq!(
            error.current_context(),
            &errors::ApiErrorResponse::ProviderNotFound {
                provider: "stripe".to_string()
            }
        );
    }
}
