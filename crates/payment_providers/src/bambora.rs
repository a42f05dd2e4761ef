//! Bambora payment provider
//!
//! Implements the provider contract of the host order system (form generation, callback
//! processing, status fetch, capture, refund and cancel) on top of [`GatewayClient`].

use common_enums::PaymentStatus;
use common_utils::{errors::CustomResult, types::MinorUnit};
use connector_interfaces::{configs::Connectors, webhooks::CallbackParameters};
use domain_models::{
    orders::OrderReadOnly,
    payments::{ApiResult, CallbackResult, CheckoutUrls, FormMethod, PaymentForm, TransactionInfo},
    router_request_types::PaymentsSessionData,
    router_response_types::{GatewayMeta, GatewayResponse, Transaction},
};
use error_stack::{report, ResultExt};
use payment_connectors::connectors::bambora::transformers::bambora_safe_order_id;
use router_env::{instrument, logger, tracing};

use crate::{
    capabilities::{ProviderCapabilities, ProviderVariant},
    client::GatewayClient,
    errors::{ConnectorErrorExt, ProviderError},
    settings::BamboraSettings,
};

const PROVIDER_NAME: &str = "Bambora";

/// Message used when the gateway refuses a session without saying why
const NO_GATEWAY_MESSAGE: &str = "The payment gateway did not accept the request";

#[derive(Debug, Clone)]
pub struct BamboraProvider {
    variant: ProviderVariant,
    settings: BamboraSettings,
    connectors: Connectors,
    http_client: reqwest::Client,
}

impl BamboraProvider {
    pub fn new(
        variant: ProviderVariant,
        settings: BamboraSettings,
        connectors: Connectors,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            variant,
            settings,
            connectors,
            http_client,
        }
    }

    pub fn variant(&self) -> ProviderVariant {
        self.variant
    }

    pub fn capabilities(&self) -> ProviderCapabilities {
        self.variant.capabilities()
    }

    pub fn settings(&self) -> &BamboraSettings {
        &self.settings
    }

    fn gateway_client(&self) -> CustomResult<GatewayClient, ProviderError> {
        Ok(GatewayClient::new(
            self.settings.get_client_config()?,
            self.connectors.clone(),
            self.http_client.clone(),
        ))
    }

    /// Opens a checkout session and returns the form redirecting the customer to it.
    ///
    /// Unlike the other operations every failure is returned to the caller, a rejection carrying
    /// the gateway's end-user message.
    #[instrument(skip_all, fields(provider = %self.variant))]
    pub async fn generate_form(
        &self,
        order: &OrderReadOnly,
        urls: &CheckoutUrls,
    ) -> CustomResult<PaymentForm, ProviderError> {
        let currency = order.currency_code.trim().to_uppercase();
        if iso_currency::Currency::from_code(&currency).is_none() {
            return Err(report!(ProviderError::InvalidCurrency { currency }));
        }

        let amount = MinorUnit::from_major_unit(order.transaction_amount)
            .change_context(ProviderError::AmountConversionFailed)?;
        let client = self.gateway_client()?;

        let request = PaymentsSessionData {
            order_id: order.order_number.clone(),
            amount,
            currency,
            customer_email: order.customer_email.clone(),
            instant_capture_amount: if self.settings.capture {
                amount
            } else {
                MinorUnit::zero()
            },
            accept_url: urls.continue_url.clone(),
            cancel_url: urls.cancel_url.clone(),
            callback_urls: callback_urls(self.capabilities(), urls),
            language: self.settings.language.clone(),
            excluded_payment_methods: self.settings.get_excluded_payment_methods(),
            excluded_payment_groups: self.settings.get_excluded_payment_groups(),
            excluded_payment_types: self.settings.get_excluded_payment_types(),
        };

        let response = client
            .create_checkout_session(&request)
            .await
            .map_err(|error| error.to_provider_failed_response())?;
        let session = gateway_data(response, |meta| meta.end_user_message.as_deref())?;

        logger::info!(order_number = %order.order_number, "Checkout session created");
        Ok(PaymentForm {
            action_url: session.url,
            method: FormMethod::Get,
        })
    }

    /// Authenticates a gateway callback and establishes the transaction it reports.
    ///
    /// Any problem with the callback yields [`CallbackResult::BadRequest`]; only configuration
    /// errors are returned as `Err`. Processing the same callback again gives the same result.
    #[instrument(skip_all, fields(provider = %self.variant))]
    pub async fn process_callback(
        &self,
        order: &OrderReadOnly,
        parameters: &CallbackParameters,
    ) -> CustomResult<CallbackResult, ProviderError> {
        let client = self.gateway_client()?;

        match self.read_callback(&client, order, parameters).await {
            Ok(transaction_info) => Ok(CallbackResult::Ok { transaction_info }),
            Err(error) => {
                logger::error!(?error, "{PROVIDER_NAME} - ProcessCallback");
                Ok(CallbackResult::BadRequest)
            }
        }
    }

    async fn read_callback(
        &self,
        client: &GatewayClient,
        order: &OrderReadOnly,
        parameters: &CallbackParameters,
    ) -> CustomResult<TransactionInfo, ProviderError> {
        let verified = client
            .verify_callback(parameters)
            .change_context(ProviderError::CallbackAuthenticationFailed)?;
        if !verified {
            return Err(report!(ProviderError::CallbackAuthenticationFailed));
        }

        let transaction_id = required_parameter(parameters, "txnid")?;
        let order_id = required_parameter(parameters, "orderid")?;
        if order_id != bambora_safe_order_id(&order.order_number) {
            return Err(report!(ProviderError::InvalidCallback {
                reason: "orderid does not match the order"
            }))
            .attach_printable_lazy(|| format!("orderid: {order_id}"));
        }

        let amount = callback_amount(parameters, "amount")?;
        let fee = callback_amount(parameters, "txnfee")?;
        if !amount.is_positive() {
            return Err(report!(ProviderError::InvalidCallback {
                reason: "amount must be positive"
            }));
        }

        let payment_status = if self.capabilities().supports_status_fetch {
            self.fetch_transaction(client, transaction_id)
                .await?
                .payment_status
        } else if self.settings.capture {
            PaymentStatus::Captured
        } else {
            PaymentStatus::Authorized
        };

        let amount_authorized = amount
            .checked_add(fee)
            .ok_or_else(|| report!(ProviderError::AmountConversionFailed))?;

        Ok(TransactionInfo {
            transaction_id: transaction_id.to_string(),
            amount_authorized: amount_authorized.to_major_unit(),
            transaction_fee: fee.to_major_unit(),
            payment_status,
        })
    }

    #[instrument(skip_all, fields(provider = %self.variant))]
    pub async fn fetch_payment_status(
        &self,
        order: &OrderReadOnly,
    ) -> CustomResult<ApiResult, ProviderError> {
        const OPERATION: &str = "FetchPaymentStatus";
        if !self.capabilities().supports_status_fetch {
            return Ok(self.unsupported(OPERATION));
        }
        let client = self.gateway_client()?;

        let result = async {
            let transaction_id = transaction_id(order)?;
            let transaction = self.fetch_transaction(&client, transaction_id).await?;
            Ok::<_, error_stack::Report<ProviderError>>(ApiResult::success(
                Some(transaction.id),
                transaction.payment_status,
            ))
        }
        .await;
        Ok(into_api_result(OPERATION, result))
    }

    #[instrument(skip_all, fields(provider = %self.variant))]
    pub async fn cancel_payment(
        &self,
        order: &OrderReadOnly,
    ) -> CustomResult<ApiResult, ProviderError> {
        const OPERATION: &str = "CancelPayment";
        if !self.capabilities().supports_cancel {
            return Ok(self.unsupported(OPERATION));
        }
        let client = self.gateway_client()?;

        let result = async {
            let transaction_id = transaction_id(order)?;
            let response = client
                .delete_transaction(transaction_id)
                .await
                .map_err(|error| error.to_provider_operation_response())?;
            let action = gateway_data(response, GatewayMeta::diagnostic)?;
            Ok::<_, error_stack::Report<ProviderError>>(ApiResult::success(
                Some(action.transaction_id),
                PaymentStatus::Cancelled,
            ))
        }
        .await;
        Ok(into_api_result(OPERATION, result))
    }

    /// Captures the full authorized amount.
    #[instrument(skip_all, fields(provider = %self.variant))]
    pub async fn capture_payment(
        &self,
        order: &OrderReadOnly,
    ) -> CustomResult<ApiResult, ProviderError> {
        const OPERATION: &str = "CapturePayment";
        if !self.capabilities().supports_capture {
            return Ok(self.unsupported(OPERATION));
        }
        let client = self.gateway_client()?;

        let result = async {
            let transaction_id = transaction_id(order)?;
            let amount = authorized_amount(order)?;
            let response = client
                .capture_transaction(transaction_id, Some(amount))
                .await
                .map_err(|error| error.to_provider_operation_response())?;
            let action = gateway_data(response, GatewayMeta::diagnostic)?;
            Ok::<_, error_stack::Report<ProviderError>>(ApiResult::success(
                Some(action.transaction_id),
                PaymentStatus::Captured,
            ))
        }
        .await;
        Ok(into_api_result(OPERATION, result))
    }

    /// Credits the full authorized amount back to the customer.
    #[instrument(skip_all, fields(provider = %self.variant))]
    pub async fn refund_payment(
        &self,
        order: &OrderReadOnly,
    ) -> CustomResult<ApiResult, ProviderError> {
        const OPERATION: &str = "RefundPayment";
        if !self.capabilities().supports_refund {
            return Ok(self.unsupported(OPERATION));
        }
        let client = self.gateway_client()?;

        let result = async {
            let transaction_id = transaction_id(order)?;
            let amount = authorized_amount(order)?;
            let response = client
                .credit_transaction(transaction_id, amount)
                .await
                .map_err(|error| error.to_provider_operation_response())?;
            let action = gateway_data(response, GatewayMeta::diagnostic)?;
            Ok::<_, error_stack::Report<ProviderError>>(ApiResult::success(
                Some(action.transaction_id),
                PaymentStatus::Refunded,
            ))
        }
        .await;
        Ok(into_api_result(OPERATION, result))
    }

    async fn fetch_transaction(
        &self,
        client: &GatewayClient,
        transaction_id: &str,
    ) -> CustomResult<Transaction, ProviderError> {
        let response = client
            .get_transaction(transaction_id)
            .await
            .map_err(|error| error.to_provider_operation_response())?;
        gateway_data(response, GatewayMeta::diagnostic)
    }

    fn unsupported(&self, operation: &'static str) -> ApiResult {
        let error = ProviderError::OperationNotSupported {
            operation,
            provider: match self.variant {
                ProviderVariant::Checkout => "bambora-checkout",
                ProviderVariant::Legacy => "bambora",
            },
        };
        logger::warn!(%error, "{PROVIDER_NAME} - {operation}");
        ApiResult::with_diagnostic(error.to_string())
    }
}

/// Data of an accepted gateway response; a refusal becomes [`ProviderError::GatewayRejected`]
/// with the message picked by `message`.
fn gateway_data<T>(
    response: GatewayResponse<T>,
    message: impl FnOnce(&GatewayMeta) -> Option<&str>,
) -> CustomResult<T, ProviderError> {
    let success = response.is_success();
    let GatewayResponse { meta, data } = response;
    match data {
        Some(data) if success => Ok(data),
        _ => Err(report!(ProviderError::GatewayRejected {
            message: message(&meta).unwrap_or(NO_GATEWAY_MESSAGE).to_string(),
        })),
    }
}

/// Variants finalized at the continue URL get no gateway callback
fn callback_urls(capabilities: ProviderCapabilities, urls: &CheckoutUrls) -> Vec<String> {
    if capabilities.finalizes_at_continue_url {
        Vec::new()
    } else {
        vec![urls.callback_url.clone()]
    }
}

fn into_api_result(
    operation: &'static str,
    result: CustomResult<ApiResult, ProviderError>,
) -> ApiResult {
    result.unwrap_or_else(|error| {
        logger::error!(?error, "{PROVIDER_NAME} - {operation}");
        ApiResult::with_diagnostic(error.current_context().to_string())
    })
}

fn required_parameter<'a>(
    parameters: &'a CallbackParameters,
    key: &'static str,
) -> CustomResult<&'a str, ProviderError> {
    parameters
        .get(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            report!(ProviderError::InvalidCallback {
                reason: "required parameter is missing"
            })
        })
        .attach_printable_lazy(|| format!("parameter: {key}"))
}

/// Minor unit amount of a callback parameter; absent means zero.
fn callback_amount(
    parameters: &CallbackParameters,
    key: &'static str,
) -> CustomResult<MinorUnit, ProviderError> {
    format!("0{}", parameters.get(key).unwrap_or_default())
        .parse::<i32>()
        .map(MinorUnit::from)
        .change_context(ProviderError::InvalidCallback {
            reason: "amount is not a number",
        })
        .attach_printable_lazy(|| format!("parameter: {key}"))
}

fn transaction_id(order: &OrderReadOnly) -> CustomResult<&str, ProviderError> {
    order
        .transaction_info
        .transaction_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| {
            report!(ProviderError::MissingTransactionDetails {
                field_name: "transaction_id"
            })
        })
}

fn authorized_amount(order: &OrderReadOnly) -> CustomResult<MinorUnit, ProviderError> {
    let amount = order.transaction_info.amount_authorized.ok_or_else(|| {
        report!(ProviderError::MissingTransactionDetails {
            field_name: "amount_authorized"
        })
    })?;
    MinorUnit::from_major_unit(amount).change_context(ProviderError::AmountConversionFailed)
}
