pub mod transformers;

use common_utils::{
    crypto,
    errors::CustomResult,
    ext_traits::BytesExt,
    request::{Method, Request, RequestBuilder, RequestContent},
};
use connector_interfaces::{
    api::{ConnectorCommon, ConnectorIntegration},
    configs::Connectors,
    consts, errors,
    types::{
        PaymentsCaptureType, PaymentsSessionType, PaymentsSyncType, PaymentsVoidType,
        RefundExecuteType, Response,
    },
    webhooks::{CallbackParameters, IncomingWebhook},
};
use domain_models::{
    router_data::ErrorResponse,
    router_flow_types::{Capture, Execute, PSync, Session, Void},
    router_request_types::{
        PaymentsCancelData, PaymentsCaptureData, PaymentsSessionData, PaymentsSyncData,
        RefundsData,
    },
    router_response_types::{CheckoutSession, GatewayResponse, Transaction, TransactionAction},
};
use error_stack::ResultExt;
use masking::{Mask, Maskable, PeekInterface, Secret};
use transformers as bambora;

use crate::constants::headers;

/// Name of the callback parameter carrying the signature
const HASH_PARAMETER: &str = "hash";

/// Bambora Europe Checkout
///
/// Sessions are created on the checkout host, transactions are read from the merchant host and
/// modified on the transaction host.
#[derive(Debug, Clone)]
pub struct Bambora {
    config: bambora::BamboraClientConfig,
}

impl Bambora {
    pub fn new(config: bambora::BamboraClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &bambora::BamboraClientConfig {
        &self.config
    }

    fn build_headers(&self) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let mut header = vec![(
            headers::ACCEPT.to_string(),
            self.common_get_content_type().to_string().into(),
        )];
        header.extend(self.get_auth_header()?);
        Ok(header)
    }

    fn transaction_url(
        base_url: &str,
        connector_transaction_id: &str,
        action: Option<&str>,
    ) -> CustomResult<String, errors::ConnectorError> {
        if connector_transaction_id.trim().is_empty() {
            return Err(error_stack::report!(
                errors::ConnectorError::MissingRequiredField {
                    field_name: "connector_transaction_id"
                }
            ));
        }
        let transaction_id = urlencoding::encode(connector_transaction_id);
        Ok(match action {
            Some(action) => format!("{base_url}transactions/{transaction_id}/{action}"),
            None => format!("{base_url}transactions/{transaction_id}"),
        })
    }

    fn parse_action_response(
        &self,
        res: Response,
        connector_transaction_id: &str,
    ) -> CustomResult<GatewayResponse<TransactionAction>, errors::ConnectorError> {
        let response: bambora::BamboraResponse = res
            .response
            .parse_struct("bambora BamboraResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        router_env::logger::info!(connector_response=?response);

        Ok(bambora::action_response(response, connector_transaction_id))
    }
}

impl ConnectorCommon for Bambora {
    fn id(&self) -> &'static str {
        "bambora"
    }

    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        connectors.bambora.base_url.as_ref()
    }

    fn get_auth_header(
        &self,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        Ok(vec![(
            headers::AUTHORIZATION.to_string(),
            format!("Basic {}", self.config.authorization_header_value().peek()).into_masked(),
        )])
    }

    /// Failed calls still carry `meta`; anything else is reported without detail.
    fn build_error_response(
        &self,
        res: Response,
    ) -> CustomResult<ErrorResponse, errors::ConnectorError> {
        let response: Result<bambora::BamboraResponse, _> =
            res.response.parse_struct("bambora ErrorResponse");

        let Ok(response) = response else {
            router_env::logger::warn!(
                status_code = res.status_code,
                "bambora error response is not json"
            );
            return Ok(ErrorResponse {
                status_code: res.status_code,
                code: consts::NO_ERROR_CODE.to_string(),
                message: consts::NO_ERROR_MESSAGE.to_string(),
                reason: None,
            });
        };

        router_env::logger::info!(connector_response=?response);

        let message = response.meta.message.unwrap_or_default();
        Ok(ErrorResponse {
            status_code: res.status_code,
            code: res.status_code.to_string(),
            message: message
                .end_user
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string()),
            reason: message.merchant,
        })
    }
}

// Session: POST {checkout}/sessions
impl ConnectorIntegration<Session, PaymentsSessionData, GatewayResponse<CheckoutSession>>
    for Bambora
{
    fn get_headers(
        &self,
        _req: &PaymentsSessionData,
        _connectors: &Connectors,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let mut header = self.build_headers()?;
        header.push((
            headers::CONTENT_TYPE.to_string(),
            self.common_get_content_type().to_string().into(),
        ));
        Ok(header)
    }

    fn get_url(
        &self,
        _req: &PaymentsSessionData,
        connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(format!("{}sessions", self.base_url(connectors)))
    }

    fn get_request_body(
        &self,
        req: &PaymentsSessionData,
        _connectors: &Connectors,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        let connector_req = bambora::BamboraCheckoutSessionRequest::from(req);
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn build_request(
        &self,
        req: &PaymentsSessionData,
        connectors: &Connectors,
    ) -> CustomResult<Option<Request>, errors::ConnectorError> {
        Ok(Some(
            RequestBuilder::new()
                .method(Method::Post)
                .url(&PaymentsSessionType::get_url(self, req, connectors)?)
                .attach_default_headers()
                .headers(PaymentsSessionType::get_headers(self, req, connectors)?)
                .set_optional_body(PaymentsSessionType::get_request_body(
                    self, req, connectors,
                )?)
                .build(),
        ))
    }

    fn handle_response(
        &self,
        _req: &PaymentsSessionData,
        res: Response,
    ) -> CustomResult<GatewayResponse<CheckoutSession>, errors::ConnectorError> {
        let response: bambora::BamboraCheckoutSessionResponse = res
            .response
            .parse_struct("bambora CheckoutSessionResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        router_env::logger::info!(connector_response=?response);

        GatewayResponse::try_from(response)
    }
}

// PSync: GET {merchant}/transactions/{id}
impl ConnectorIntegration<PSync, PaymentsSyncData, GatewayResponse<Transaction>> for Bambora {
    fn get_headers(
        &self,
        _req: &PaymentsSyncData,
        _connectors: &Connectors,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers()
    }

    fn get_http_method(&self) -> Method {
        Method::Get
    }

    fn get_url(
        &self,
        req: &PaymentsSyncData,
        connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Self::transaction_url(
            &connectors.bambora.merchant_base_url,
            &req.connector_transaction_id,
            None,
        )
    }

    fn build_request(
        &self,
        req: &PaymentsSyncData,
        connectors: &Connectors,
    ) -> CustomResult<Option<Request>, errors::ConnectorError> {
        Ok(Some(
            RequestBuilder::new()
                .method(PaymentsSyncType::get_http_method(self))
                .url(&PaymentsSyncType::get_url(self, req, connectors)?)
                .attach_default_headers()
                .headers(PaymentsSyncType::get_headers(self, req, connectors)?)
                .build(),
        ))
    }

    fn handle_response(
        &self,
        _req: &PaymentsSyncData,
        res: Response,
    ) -> CustomResult<GatewayResponse<Transaction>, errors::ConnectorError> {
        let response: bambora::BamboraTransactionResponse = res
            .response
            .parse_struct("bambora TransactionResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        router_env::logger::info!(connector_response=?response);

        GatewayResponse::try_from(response)
    }
}

// Capture: POST {transaction}/transactions/{id}/capture
impl ConnectorIntegration<Capture, PaymentsCaptureData, GatewayResponse<TransactionAction>>
    for Bambora
{
    fn get_headers(
        &self,
        _req: &PaymentsCaptureData,
        _connectors: &Connectors,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers()
    }

    fn get_url(
        &self,
        req: &PaymentsCaptureData,
        connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Self::transaction_url(
            &connectors.bambora.transaction_base_url,
            &req.connector_transaction_id,
            Some("capture"),
        )
    }

    fn get_request_body(
        &self,
        req: &PaymentsCaptureData,
        _connectors: &Connectors,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        Ok(req.amount_to_capture.map(|amount| {
            RequestContent::Json(Box::new(bambora::BamboraAmountRequest { amount }))
        }))
    }

    fn build_request(
        &self,
        req: &PaymentsCaptureData,
        connectors: &Connectors,
    ) -> CustomResult<Option<Request>, errors::ConnectorError> {
        Ok(Some(
            RequestBuilder::new()
                .method(Method::Post)
                .url(&PaymentsCaptureType::get_url(self, req, connectors)?)
                .attach_default_headers()
                .headers(PaymentsCaptureType::get_headers(self, req, connectors)?)
                .set_optional_body(PaymentsCaptureType::get_request_body(
                    self, req, connectors,
                )?)
                .build(),
        ))
    }

    fn handle_response(
        &self,
        req: &PaymentsCaptureData,
        res: Response,
    ) -> CustomResult<GatewayResponse<TransactionAction>, errors::ConnectorError> {
        self.parse_action_response(res, &req.connector_transaction_id)
    }
}

// Void: POST {transaction}/transactions/{id}/delete
impl ConnectorIntegration<Void, PaymentsCancelData, GatewayResponse<TransactionAction>>
    for Bambora
{
    fn get_headers(
        &self,
        _req: &PaymentsCancelData,
        _connectors: &Connectors,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers()
    }

    fn get_url(
        &self,
        req: &PaymentsCancelData,
        connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Self::transaction_url(
            &connectors.bambora.transaction_base_url,
            &req.connector_transaction_id,
            Some("delete"),
        )
    }

    fn build_request(
        &self,
        req: &PaymentsCancelData,
        connectors: &Connectors,
    ) -> CustomResult<Option<Request>, errors::ConnectorError> {
        Ok(Some(
            RequestBuilder::new()
                .method(Method::Post)
                .url(&PaymentsVoidType::get_url(self, req, connectors)?)
                .attach_default_headers()
                .headers(PaymentsVoidType::get_headers(self, req, connectors)?)
                .build(),
        ))
    }

    fn handle_response(
        &self,
        req: &PaymentsCancelData,
        res: Response,
    ) -> CustomResult<GatewayResponse<TransactionAction>, errors::ConnectorError> {
        self.parse_action_response(res, &req.connector_transaction_id)
    }
}

// Refund: POST {transaction}/transactions/{id}/credit
impl ConnectorIntegration<Execute, RefundsData, GatewayResponse<TransactionAction>> for Bambora {
    fn get_headers(
        &self,
        _req: &RefundsData,
        _connectors: &Connectors,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers()
    }

    fn get_url(
        &self,
        req: &RefundsData,
        connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Self::transaction_url(
            &connectors.bambora.transaction_base_url,
            &req.connector_transaction_id,
            Some("credit"),
        )
    }

    fn get_request_body(
        &self,
        req: &RefundsData,
        _connectors: &Connectors,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        let connector_req = bambora::BamboraAmountRequest {
            amount: req.refund_amount,
        };
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn build_request(
        &self,
        req: &RefundsData,
        connectors: &Connectors,
    ) -> CustomResult<Option<Request>, errors::ConnectorError> {
        Ok(Some(
            RequestBuilder::new()
                .method(Method::Post)
                .url(&RefundExecuteType::get_url(self, req, connectors)?)
                .attach_default_headers()
                .headers(RefundExecuteType::get_headers(self, req, connectors)?)
                .set_optional_body(RefundExecuteType::get_request_body(
                    self, req, connectors,
                )?)
                .build(),
        ))
    }

    fn handle_response(
        &self,
        req: &RefundsData,
        res: Response,
    ) -> CustomResult<GatewayResponse<TransactionAction>, errors::ConnectorError> {
        self.parse_action_response(res, &req.connector_transaction_id)
    }
}

/// Callbacks are signed with MD5 over every parameter value except `hash`, in the order they
/// were sent, followed by the merchant's MD5 key. MD5 is what the gateway uses; it is not a
/// choice available to the merchant.
impl IncomingWebhook for Bambora {
    fn get_webhook_source_verification_algorithm(
        &self,
    ) -> CustomResult<Box<dyn crypto::GenerateDigest + Send>, errors::ConnectorError> {
        Ok(Box::new(crypto::Md5))
    }

    fn get_webhook_source_verification_signature(
        &self,
        request: &CallbackParameters,
    ) -> CustomResult<Option<String>, errors::ConnectorError> {
        Ok(request
            .get(HASH_PARAMETER)
            .filter(|hash| !hash.trim().is_empty())
            .map(str::to_string))
    }

    fn get_webhook_source_verification_message(
        &self,
        request: &CallbackParameters,
        secret: &Secret<String>,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        let mut message = request
            .iter()
            .filter(|(key, _)| !key.eq_ignore_ascii_case(HASH_PARAMETER))
            .map(|(_, value)| value)
            .collect::<String>();
        message.push_str(secret.peek());
        Ok(message.into_bytes())
    }
}
