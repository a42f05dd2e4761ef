//! API interface

use common_utils::{
    errors::CustomResult,
    request::{Method, Request, RequestContent},
};
use domain_models::router_data::ErrorResponse;
use error_stack::report;
use masking::Maskable;

use crate::{configs::Connectors, consts, errors, types::Response};

/// Connector Common Trait
pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    /// HTTP `Content-Type` to be used for POST requests.
    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    /// The base URL for interacting with the connector's API.
    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    /// HTTP headers used for authorization.
    fn get_auth_header(
        &self,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        Ok(Vec::new())
    }

    /// common error response for a connector if it is same in all case
    fn build_error_response(
        &self,
        res: Response,
    ) -> CustomResult<ErrorResponse, errors::ConnectorError> {
        Ok(ErrorResponse {
            status_code: res.status_code,
            code: consts::NO_ERROR_CODE.to_string(),
            message: consts::NO_ERROR_MESSAGE.to_string(),
            reason: None,
        })
    }
}

/// The request and response handling of a single connector flow.
///
/// `Flow` is a marker type from `domain_models::router_flow_types`, `Req` the flow's request data
/// and `Resp` what the flow resolves to once the connector response is handled.
pub trait ConnectorIntegration<Flow, Req, Resp>: ConnectorCommon + Sync {
    /// Headers to attach to the request
    fn get_headers(
        &self,
        _req: &Req,
        _connectors: &Connectors,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        Ok(vec![])
    }

    /// HTTP method of the request
    fn get_http_method(&self) -> Method {
        Method::Post
    }

    /// Absolute URL of the request
    fn get_url(
        &self,
        _req: &Req,
        _connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Err(report!(errors::ConnectorError::FailedToObtainIntegrationUrl))
    }

    /// Body of the request, if any
    fn get_request_body(
        &self,
        _req: &Req,
        _connectors: &Connectors,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        Ok(None)
    }

    /// Builds the request. `None` means the flow does not call the connector.
    fn build_request(
        &self,
        _req: &Req,
        _connectors: &Connectors,
    ) -> CustomResult<Option<Request>, errors::ConnectorError> {
        Ok(None)
    }

    /// Turns a successful (2xx) response into the flow's response type
    fn handle_response(
        &self,
        _req: &Req,
        _res: Response,
    ) -> CustomResult<Resp, errors::ConnectorError> {
        Err(report!(errors::ConnectorError::FlowNotSupported {
            flow: std::any::type_name::<Flow>().to_string(),
            connector: self.id().to_string(),
        }))
    }

    /// Turns an unsuccessful response into an [`ErrorResponse`]
    fn get_error_response(
        &self,
        res: Response,
    ) -> CustomResult<ErrorResponse, errors::ConnectorError> {
        self.build_error_response(res)
    }
}
