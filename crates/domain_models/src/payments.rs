//! Results a payment provider hands back to the host order system

use common_enums::PaymentStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Return/cancel/error URLs of the host's checkout pages
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub continue_url: String,
    pub cancel_url: String,
    pub callback_url: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

/// A redirect form the host renders to send the customer to the gateway
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub action_url: String,
    pub method: FormMethod,
}

/// Transaction details established by a verified callback
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub transaction_id: String,
    /// Amount plus fee, in major units
    pub amount_authorized: Decimal,
    pub transaction_fee: Decimal,
    pub payment_status: PaymentStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackResult {
    Ok { transaction_info: TransactionInfo },
    /// Carries no detail on purpose; the caller answers with a bare 400
    BadRequest,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfoUpdate {
    pub transaction_id: Option<String>,
    pub payment_status: PaymentStatus,
}

/// Outcome of a status fetch, capture, refund or cancel.
///
/// A gateway rejection or transport failure is a normal, unsuccessful result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    pub transaction_info: Option<TransactionInfoUpdate>,
    pub diagnostic: Option<String>,
}

impl ApiResult {
    pub fn success(transaction_id: Option<String>, payment_status: PaymentStatus) -> Self {
        Self {
            success: true,
            transaction_info: Some(TransactionInfoUpdate {
                transaction_id,
                payment_status,
            }),
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(diagnostic: impl Into<String>) -> Self {
        Self {
            diagnostic: Some(diagnostic.into()),
            ..Self::default()
        }
    }
}
