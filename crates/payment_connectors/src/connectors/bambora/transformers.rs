use base64::Engine;
use common_enums::{GatewayMode, PaymentStatus};
use common_utils::{
    consts,
    types::{deserialize_nullable_minor_unit, MinorUnit},
};
use connector_interfaces::errors;
use domain_models::{
    router_request_types::PaymentsSessionData,
    router_response_types::{
        AvailableAmounts, CheckoutSession, GatewayMeta, GatewayResponse, Transaction,
        TransactionAction, TransactionTotals,
    },
};
use error_stack::report;
use masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

/// Full screen payment window
const PAYMENT_WINDOW_ID: u8 = 1;

/// Credentials of one gateway mode, as found in provider settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BamboraCredentials {
    pub merchant_number: Option<Secret<String>>,
    pub access_key: Option<Secret<String>>,
    pub secret_key: Option<Secret<String>>,
    pub md5_key: Option<Secret<String>>,
}

/// Credentials the gateway client authenticates with
#[derive(Debug, Clone)]
pub struct BamboraClientConfig {
    access_key: Secret<String>,
    merchant_number: Secret<String>,
    secret_key: Secret<String>,
    md5_key: Secret<String>,
    /// base64 of `access_key@merchant_number:secret_key`
    authorization_header_value: Secret<String>,
}

impl BamboraClientConfig {
    /// Picks the credential set matching `mode`.
    pub fn select(
        mode: GatewayMode,
        test: &BamboraCredentials,
        live: &BamboraCredentials,
    ) -> Result<Self, error_stack::Report<errors::ConnectorError>> {
        match mode {
            GatewayMode::Test => Self::try_from(test),
            GatewayMode::Live => Self::try_from(live),
        }
    }

    pub fn access_key(&self) -> &Secret<String> {
        &self.access_key
    }

    pub fn merchant_number(&self) -> &Secret<String> {
        &self.merchant_number
    }

    pub fn secret_key(&self) -> &Secret<String> {
        &self.secret_key
    }

    /// Shared secret callbacks are signed with
    pub fn md5_key(&self) -> &Secret<String> {
        &self.md5_key
    }

    pub fn authorization_header_value(&self) -> &Secret<String> {
        &self.authorization_header_value
    }
}

impl TryFrom<&BamboraCredentials> for BamboraClientConfig {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(credentials: &BamboraCredentials) -> Result<Self, Self::Error> {
        let access_key = required_credential(&credentials.access_key, "access_key")?;
        let merchant_number = required_credential(&credentials.merchant_number, "merchant_number")?;
        let secret_key = required_credential(&credentials.secret_key, "secret_key")?;
        let md5_key = required_credential(&credentials.md5_key, "md5_key")?;

        let authorization_header_value = Secret::new(consts::BASE64_ENGINE.encode(format!(
            "{}@{}:{}",
            access_key.peek(),
            merchant_number.peek(),
            secret_key.peek()
        )));

        Ok(Self {
            access_key,
            merchant_number,
            secret_key,
            md5_key,
            authorization_header_value,
        })
    }
}

fn required_credential(
    value: &Option<Secret<String>>,
    config: &'static str,
) -> Result<Secret<String>, error_stack::Report<errors::ConnectorError>> {
    value
        .as_ref()
        .filter(|secret| !secret.peek().trim().is_empty())
        .cloned()
        .ok_or_else(|| report!(errors::ConnectorError::InvalidConnectorConfig { config }))
}

/// Drops every character that is not an ASCII letter or digit.
pub fn bambora_safe_order_id(order_id: &str) -> String {
    order_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Derives the payment status from the totals, first match wins:
/// credited, declined, captured, authorized.
pub fn get_payment_status(totals: &TransactionTotals) -> PaymentStatus {
    if totals.credited.is_positive() {
        PaymentStatus::Refunded
    } else if totals.declined.is_positive() {
        PaymentStatus::Cancelled
    } else if totals.captured.is_positive() {
        PaymentStatus::Captured
    } else if totals.authorized.is_positive() {
        PaymentStatus::Authorized
    } else {
        PaymentStatus::Initialized
    }
}

// Session request

#[derive(Debug, Serialize)]
pub struct BamboraCheckoutSessionRequest {
    #[serde(rename = "instantcaptureamount")]
    instant_capture_amount: MinorUnit,
    order: BamboraOrder,
    customer: BamboraCustomer,
    #[serde(rename = "url")]
    urls: BamboraUrls,
    #[serde(rename = "paymentwindow")]
    payment_window: BamboraPaymentWindow,
}

#[derive(Debug, Serialize)]
pub struct BamboraOrder {
    id: String,
    amount: MinorUnit,
    currency: String,
}

#[derive(Debug, Serialize)]
pub struct BamboraCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Secret<String>>,
}

#[derive(Debug, Serialize)]
pub struct BamboraUrls {
    #[serde(rename = "immediateredirecttoaccept")]
    immediate_redirect_to_accept: u8,
    accept: String,
    cancel: String,
    callbacks: Vec<BamboraCallbackUrl>,
}

#[derive(Debug, Serialize)]
pub struct BamboraCallbackUrl {
    url: String,
}

#[derive(Debug, Serialize)]
pub struct BamboraPaymentWindow {
    id: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(rename = "paymentmethods", skip_serializing_if = "Option::is_none")]
    payment_methods: Option<Vec<BamboraPaymentFilter>>,
    #[serde(rename = "paymentgroups", skip_serializing_if = "Option::is_none")]
    payment_groups: Option<Vec<BamboraPaymentFilter>>,
    #[serde(rename = "paymenttypes", skip_serializing_if = "Option::is_none")]
    payment_types: Option<Vec<BamboraPaymentFilter>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BamboraPaymentFilter {
    id: String,
    action: BamboraFilterAction,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BamboraFilterAction {
    Exclude,
}

fn exclusion_filters(ids: &[String]) -> Option<Vec<BamboraPaymentFilter>> {
    let filters = ids
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(|id| BamboraPaymentFilter {
            id: id.to_string(),
            action: BamboraFilterAction::Exclude,
        })
        .collect::<Vec<_>>();

    (!filters.is_empty()).then_some(filters)
}

impl From<&PaymentsSessionData> for BamboraCheckoutSessionRequest {
    fn from(item: &PaymentsSessionData) -> Self {
        Self {
            instant_capture_amount: item.instant_capture_amount,
            order: BamboraOrder {
                id: bambora_safe_order_id(&item.order_id),
                amount: item.amount,
                currency: item.currency.clone(),
            },
            customer: BamboraCustomer {
                email: item.customer_email.clone(),
            },
            urls: BamboraUrls {
                immediate_redirect_to_accept: 1,
                accept: item.accept_url.clone(),
                cancel: item.cancel_url.clone(),
                callbacks: item
                    .callback_urls
                    .iter()
                    .map(|url| BamboraCallbackUrl { url: url.clone() })
                    .collect(),
            },
            payment_window: BamboraPaymentWindow {
                id: PAYMENT_WINDOW_ID,
                language: item.language.clone(),
                payment_methods: exclusion_filters(&item.excluded_payment_methods),
                payment_groups: exclusion_filters(&item.excluded_payment_groups),
                payment_types: exclusion_filters(&item.excluded_payment_types),
            },
        }
    }
}

/// Body of capture and credit requests
#[derive(Debug, Serialize)]
pub struct BamboraAmountRequest {
    pub amount: MinorUnit,
}

// Responses

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BamboraResponseMeta {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub message: Option<BamboraMessage>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BamboraMessage {
    #[serde(rename = "enduser")]
    pub end_user: Option<String>,
    pub merchant: Option<String>,
}

impl From<BamboraResponseMeta> for GatewayMeta {
    fn from(meta: BamboraResponseMeta) -> Self {
        let (end_user_message, merchant_message) = meta
            .message
            .map(|message| (message.end_user, message.merchant))
            .unwrap_or_default();
        Self {
            result: meta.result,
            end_user_message,
            merchant_message,
        }
    }
}

/// Response to capture, credit and delete
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BamboraResponse {
    #[serde(default)]
    pub meta: BamboraResponseMeta,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BamboraCheckoutSessionResponse {
    #[serde(default)]
    pub meta: BamboraResponseMeta,
    pub token: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BamboraTransactionResponse {
    #[serde(default)]
    pub meta: BamboraResponseMeta,
    pub transaction: Option<BamboraTransaction>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BamboraTransaction {
    pub id: String,
    #[serde(rename = "orderid")]
    pub order_id: Option<String>,
    #[serde(rename = "merchantnumber")]
    pub merchant_number: Option<String>,
    pub reference: Option<String>,
    #[serde(default)]
    pub available: BamboraAvailableAmounts,
    pub status: Option<String>,
    #[serde(default)]
    pub total: BamboraTotals,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BamboraTotals {
    #[serde(default, deserialize_with = "deserialize_nullable_minor_unit")]
    pub authorized: MinorUnit,
    #[serde(default, deserialize_with = "deserialize_nullable_minor_unit")]
    pub balance: MinorUnit,
    #[serde(default, deserialize_with = "deserialize_nullable_minor_unit")]
    pub captured: MinorUnit,
    #[serde(default, deserialize_with = "deserialize_nullable_minor_unit")]
    pub credited: MinorUnit,
    #[serde(default, deserialize_with = "deserialize_nullable_minor_unit")]
    pub declined: MinorUnit,
    #[serde(
        rename = "feeamount",
        default,
        deserialize_with = "deserialize_nullable_minor_unit"
    )]
    pub fee_amount: MinorUnit,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BamboraAvailableAmounts {
    #[serde(default, deserialize_with = "deserialize_nullable_minor_unit")]
    pub capture: MinorUnit,
    #[serde(default, deserialize_with = "deserialize_nullable_minor_unit")]
    pub credit: MinorUnit,
}

impl From<BamboraTotals> for TransactionTotals {
    fn from(total: BamboraTotals) -> Self {
        Self {
            authorized: total.authorized,
            balance: total.balance,
            captured: total.captured,
            credited: total.credited,
            declined: total.declined,
            fee_amount: total.fee_amount,
        }
    }
}

impl From<BamboraTransaction> for Transaction {
    fn from(transaction: BamboraTransaction) -> Self {
        let totals = TransactionTotals::from(transaction.total);
        Self {
            id: transaction.id,
            order_id: transaction.order_id,
            merchant_number: transaction.merchant_number,
            gateway_status: transaction.status,
            payment_status: get_payment_status(&totals),
            totals,
            available: AvailableAmounts {
                capture: transaction.available.capture,
                credit: transaction.available.credit,
            },
        }
    }
}

impl TryFrom<BamboraCheckoutSessionResponse> for GatewayResponse<CheckoutSession> {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(response: BamboraCheckoutSessionResponse) -> Result<Self, Self::Error> {
        let meta = GatewayMeta::from(response.meta);
        let data = if meta.result {
            let url = response
                .url
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| {
                    report!(errors::ConnectorError::MissingRequiredField { field_name: "url" })
                })?;
            Some(CheckoutSession {
                token: response.token,
                url,
            })
        } else {
            None
        };
        Ok(Self { meta, data })
    }
}

impl TryFrom<BamboraTransactionResponse> for GatewayResponse<Transaction> {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(response: BamboraTransactionResponse) -> Result<Self, Self::Error> {
        let meta = GatewayMeta::from(response.meta);
        let data = if meta.result {
            let transaction = response.transaction.ok_or_else(|| {
                report!(errors::ConnectorError::MissingRequiredField {
                    field_name: "transaction"
                })
            })?;
            Some(Transaction::from(transaction))
        } else {
            None
        };
        Ok(Self { meta, data })
    }
}

/// Pairs an acknowledgement with the transaction it was issued for
pub(super) fn action_response(
    response: BamboraResponse,
    transaction_id: &str,
) -> GatewayResponse<TransactionAction> {
    let meta = GatewayMeta::from(response.meta);
    let data = meta.result.then(|| TransactionAction {
        transaction_id: transaction_id.to_string(),
    });
    GatewayResponse { meta, data }
}
