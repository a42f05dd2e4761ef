//! Types interface

use domain_models::{
    router_flow_types::{Capture, Execute, PSync, Session, Void},
    router_request_types::{
        PaymentsCancelData, PaymentsCaptureData, PaymentsSessionData, PaymentsSyncData,
        RefundsData,
    },
    router_response_types::{CheckoutSession, GatewayResponse, Transaction, TransactionAction},
};

use crate::api::ConnectorIntegration;

/// Type alias for `ConnectorIntegration<Session, PaymentsSessionData, GatewayResponse<CheckoutSession>>`
pub type PaymentsSessionType =
    dyn ConnectorIntegration<Session, PaymentsSessionData, GatewayResponse<CheckoutSession>>;
/// Type alias for `ConnectorIntegration<PSync, PaymentsSyncData, GatewayResponse<Transaction>>`
pub type PaymentsSyncType =
    dyn ConnectorIntegration<PSync, PaymentsSyncData, GatewayResponse<Transaction>>;
/// Type alias for `ConnectorIntegration<Capture, PaymentsCaptureData, GatewayResponse<TransactionAction>>`
pub type PaymentsCaptureType =
    dyn ConnectorIntegration<Capture, PaymentsCaptureData, GatewayResponse<TransactionAction>>;
/// Type alias for `ConnectorIntegration<Void, PaymentsCancelData, GatewayResponse<TransactionAction>>`
pub type PaymentsVoidType =
    dyn ConnectorIntegration<Void, PaymentsCancelData, GatewayResponse<TransactionAction>>;
/// Type alias for `ConnectorIntegration<Execute, RefundsData, GatewayResponse<TransactionAction>>`
pub type RefundExecuteType =
    dyn ConnectorIntegration<Execute, RefundsData, GatewayResponse<TransactionAction>>;

/// A connector's raw HTTP response
#[derive(Clone, Debug)]
pub struct Response {
    /// headers
    pub headers: Option<http::HeaderMap>,
    /// response
    pub response: bytes::Bytes,
    /// status code
    pub status_code: u16,
}

/// Outbound proxy used for connector calls
#[derive(Debug, serde::Deserialize, Clone, Default)]
#[serde(default)]
pub struct Proxy {
    /// Proxy for `http://` URLs
    pub http_url: Option<String>,
    /// Proxy for `https://` URLs
    pub https_url: Option<String>,
    /// Seconds an idle pooled connection is kept open
    pub idle_pool_connection_timeout: Option<u64>,
    /// Comma separated hosts which are never proxied
    pub bypass_proxy_hosts: Option<String>,
}
