use common_utils::errors::CustomResult;
use connector_interfaces::{api::ConnectorIntegration, configs::Connectors, errors};
use error_stack::{report, ResultExt};
use external_services::http_client;
use router_env::{instrument, logger, tracing};

/// Builds the connector request for a flow, sends it and hands the response back to the
/// connector.
///
/// A 2xx response goes through `handle_response`, anything else through `get_error_response` and
/// ends up as [`errors::ConnectorError::FailedAtConnector`]. Requests are sent once.
#[instrument(skip_all, fields(connector = connector_integration.id()))]
pub async fn execute_connector_processing_step<F, Req, Resp>(
    client: &reqwest::Client,
    connectors: &Connectors,
    connector_integration: &dyn ConnectorIntegration<F, Req, Resp>,
    req: &Req,
) -> CustomResult<Resp, errors::ConnectorError> {
    let request = connector_integration
        .build_request(req, connectors)?
        .ok_or_else(|| {
            report!(errors::ConnectorError::FlowNotSupported {
                flow: std::any::type_name::<F>().to_string(),
                connector: connector_integration.id().to_string(),
            })
        })?;

    let response = http_client::call_connector_api(client, request)
        .await
        .change_context(errors::ConnectorError::ProcessingStepFailed(None))
        .attach_printable("Failed to call connector")?;

    match response {
        Ok(body) => connector_integration.handle_response(req, body),
        Err(body) => {
            let error_response = connector_integration.get_error_response(body)?;
            logger::warn!(
                status_code = error_response.status_code,
                code = %error_response.code,
                reason = ?error_response.reason,
                "connector returned an error response"
            );
            Err(report!(errors::ConnectorError::FailedAtConnector {
                message: error_response.message,
                code: error_response.code,
                reason: error_response.reason.clone(),
            }))
            .attach_printable_lazy(|| {
                format!(
                    "status code: {}, reason: {:?}",
                    error_response.status_code, error_response.reason
                )
            })
        }
    }
}
