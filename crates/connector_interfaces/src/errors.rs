//! Errors interface

/// Connector Errors
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConnectorError {
    #[error("Error while obtaining URL for the integration")]
    FailedToObtainIntegrationUrl,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Failed to execute a processing step: {0:?}")]
    ProcessingStepFailed(Option<bytes::Bytes>),
    #[error("Connector returned an error response with code {code}: {message}")]
    FailedAtConnector {
        message: String,
        code: String,
        /// Detail meant for the merchant rather than the customer
        reason: Option<String>,
    },
    #[error("{flow} flow not supported by {connector} connector")]
    FlowNotSupported { flow: String, connector: String },
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid connector configuration: {config}")]
    InvalidConnectorConfig { config: &'static str },
    #[error("Incoming webhook source verification failed")]
    WebhookSourceVerificationFailed,
}

/// Errors raised while talking to a remote host
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum HttpClientError {
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    #[error("URL parsing failed")]
    UrlParsingFailed,
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("Failed to send request to connector {0}")]
    RequestNotSent(String),
    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
}
