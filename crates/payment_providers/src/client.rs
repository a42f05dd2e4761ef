//! Gateway operations over the Bambora connector

use common_utils::{errors::CustomResult, types::MinorUnit};
use connector_interfaces::{
    configs::Connectors,
    errors::ConnectorError,
    types::{
        PaymentsCaptureType, PaymentsSessionType, PaymentsSyncType, PaymentsVoidType,
        RefundExecuteType,
    },
    webhooks::{CallbackParameters, IncomingWebhook},
};
use domain_models::{
    router_flow_types::{Capture, Execute, PSync, Session, Void},
    router_request_types::{
        PaymentsCancelData, PaymentsCaptureData, PaymentsSessionData, PaymentsSyncData,
        RefundsData,
    },
    router_response_types::{CheckoutSession, GatewayResponse, Transaction, TransactionAction},
};
use payment_connectors::connectors::{bambora::transformers::BamboraClientConfig, Bambora};
use router_env::{instrument, tracing};

use crate::services::api::execute_connector_processing_step;

/// Issues gateway operations with one credential set.
///
/// Holds only immutable configuration and a pooled HTTP client, so one instance can serve
/// concurrent requests for different orders.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    connector: Bambora,
    connectors: Connectors,
    http_client: reqwest::Client,
}

impl GatewayClient {
    pub fn new(
        config: BamboraClientConfig,
        connectors: Connectors,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            connector: Bambora::new(config),
            connectors,
            http_client,
        }
    }

    #[instrument(skip_all)]
    pub async fn create_checkout_session(
        &self,
        request: &PaymentsSessionData,
    ) -> CustomResult<GatewayResponse<CheckoutSession>, ConnectorError> {
        let connector_integration: &PaymentsSessionType = &self.connector;
        execute_connector_processing_step::<Session, _, _>(
            &self.http_client,
            &self.connectors,
            connector_integration,
            request,
        )
        .await
    }

    #[instrument(skip_all)]
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> CustomResult<GatewayResponse<Transaction>, ConnectorError> {
        let connector_integration: &PaymentsSyncType = &self.connector;
        execute_connector_processing_step::<PSync, _, _>(
            &self.http_client,
            &self.connectors,
            connector_integration,
            &PaymentsSyncData {
                connector_transaction_id: transaction_id.to_string(),
            },
        )
        .await
    }

    /// Captures `amount`, or the whole authorized amount when `None`.
    #[instrument(skip_all)]
    pub async fn capture_transaction(
        &self,
        transaction_id: &str,
        amount: Option<MinorUnit>,
    ) -> CustomResult<GatewayResponse<TransactionAction>, ConnectorError> {
        let connector_integration: &PaymentsCaptureType = &self.connector;
        execute_connector_processing_step::<Capture, _, _>(
            &self.http_client,
            &self.connectors,
            connector_integration,
            &PaymentsCaptureData {
                connector_transaction_id: transaction_id.to_string(),
                amount_to_capture: amount,
            },
        )
        .await
    }

    #[instrument(skip_all)]
    pub async fn credit_transaction(
        &self,
        transaction_id: &str,
        amount: MinorUnit,
    ) -> CustomResult<GatewayResponse<TransactionAction>, ConnectorError> {
        let connector_integration: &RefundExecuteType = &self.connector;
        execute_connector_processing_step::<Execute, _, _>(
            &self.http_client,
            &self.connectors,
            connector_integration,
            &RefundsData {
                connector_transaction_id: transaction_id.to_string(),
                refund_amount: amount,
            },
        )
        .await
    }

    #[instrument(skip_all)]
    pub async fn delete_transaction(
        &self,
        transaction_id: &str,
    ) -> CustomResult<GatewayResponse<TransactionAction>, ConnectorError> {
        let connector_integration: &PaymentsVoidType = &self.connector;
        execute_connector_processing_step::<Void, _, _>(
            &self.http_client,
            &self.connectors,
            connector_integration,
            &PaymentsCancelData {
                connector_transaction_id: transaction_id.to_string(),
            },
        )
        .await
    }

    /// Checks the callback signature against the configured MD5 key.
    pub fn verify_callback(&self, parameters: &CallbackParameters) -> CustomResult<bool, ConnectorError> {
        self.connector
            .verify_webhook_source(parameters, self.connector.config().md5_key())
    }
}
