use common_utils::types::MinorUnit;
use masking::Secret;

/// Data needed to open a hosted checkout session
#[derive(Debug, Clone)]
pub struct PaymentsSessionData {
    /// Order number as known by the host; connectors derive their own reference from it
    pub order_id: String,
    pub amount: MinorUnit,
    /// ISO 4217 alphabetic code, upper case
    pub currency: String,
    pub customer_email: Option<Secret<String>>,
    /// Amount captured as soon as the payment is authorized, zero for authorize-only
    pub instant_capture_amount: MinorUnit,
    pub accept_url: String,
    pub cancel_url: String,
    pub callback_urls: Vec<String>,
    pub language: Option<String>,
    pub excluded_payment_methods: Vec<String>,
    pub excluded_payment_groups: Vec<String>,
    pub excluded_payment_types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PaymentsSyncData {
    pub connector_transaction_id: String,
}

#[derive(Debug, Clone)]
pub struct PaymentsCaptureData {
    pub connector_transaction_id: String,
    /// `None` captures whatever the gateway holds as authorized
    pub amount_to_capture: Option<MinorUnit>,
}

#[derive(Debug, Clone)]
pub struct PaymentsCancelData {
    pub connector_transaction_id: String,
}

#[derive(Debug, Clone)]
pub struct RefundsData {
    pub connector_transaction_id: String,
    pub refund_amount: MinorUnit,
}
