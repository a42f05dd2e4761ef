pub mod utils;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use connector_interfaces::errors::HttpClientError;
use serde::Serialize;

pub use self::utils::{ProviderErrorExt, StorageErrorExt};
use crate::services::api::ApplicationResponse;

pub type RouterResult<T> = error_stack::Result<T, ApiErrorResponse>;
pub type RouterResponse<T> = error_stack::Result<ApplicationResponse<T>, ApiErrorResponse>;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Application configuration error: {0}")]
    ConfigurationError(config::ConfigError),

    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),

    #[error("I/O: {0}")]
    IoError(std::io::Error),

    #[error("Error while constructing api client: {0:?}")]
    ApiClientError(error_stack::Report<HttpClientError>),
}

impl From<config::ConfigError> for ApplicationError {
    fn from(error: config::ConfigError) -> Self {
        Self::ConfigurationError(error)
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiErrorResponse {
    #[error("{message}")]
    InvalidRequestData { message: String },
    #[error("Order does not exist in our records")]
    OrderNotFound,
    #[error("Order with number '{order_number}' already exists in our records")]
    DuplicateOrder { order_number: String },
    #[error("Payment provider '{provider}' does not exist")]
    ProviderNotFound { provider: String },
    #[error("Order has no {field_name} recorded")]
    MissingTransactionDetails { field_name: &'static str },
    #[error("{message}")]
    PaymentFailed { message: String },
    #[error("Payment gateway could not be reached")]
    GatewayUnavailable,
    /// Answered with a bare 400, the gateway learns nothing about the reason
    #[error("Callback rejected")]
    CallbackRejected,
    #[error("Something went wrong")]
    InternalServerError,
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "type")]
    error_type: &'a str,
    code: &'a str,
    message: String,
}

impl ApiErrorResponse {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequestData { .. } => "IR_01",
            Self::MissingTransactionDetails { .. } => "IR_02",
            Self::CallbackRejected => "IR_03",
            Self::OrderNotFound | Self::ProviderNotFound { .. } => "HE_02",
            Self::DuplicateOrder { .. } => "HE_01",
            Self::PaymentFailed { .. } => "CE_01",
            Self::GatewayUnavailable => "CE_00",
            Self::InternalServerError => "HE_00",
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequestData { .. }
            | Self::MissingTransactionDetails { .. }
            | Self::CallbackRejected => "invalid_request",
            Self::OrderNotFound | Self::ProviderNotFound { .. } | Self::DuplicateOrder { .. } => {
                "object_not_found"
            }
            Self::PaymentFailed { .. } | Self::GatewayUnavailable => "connector_error",
            Self::InternalServerError => "server_not_available",
        }
    }
}

impl ResponseError for ApiErrorResponse {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestData { .. }
            | Self::MissingTransactionDetails { .. }
            | Self::CallbackRejected
            | Self::PaymentFailed { .. } => StatusCode::BAD_REQUEST,
            Self::OrderNotFound | Self::ProviderNotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateOrder { .. } => StatusCode::CONFLICT,
            Self::GatewayUnavailable => StatusCode::BAD_GATEWAY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::CallbackRejected = self {
            return HttpResponse::BadRequest().finish();
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: ErrorBody {
                error_type: self.error_type(),
                code: self.error_code(),
                message: self.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use actix_web::body::MessageBody;

    use super::*;

    fn body(response: HttpResponse) -> serde_json::Value {
        serde_json::from_slice(&response.into_body().try_into_bytes().unwrap()).unwrap()
    }

    #[test]
    fn errors_render_type_code_and_message() {
        let response = ApiErrorResponse::ProviderNotFound {
            provider: "stripe".to_string(),
        }
        .error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body(response),
            serde_json::json!({
                "error": {
                    "type": "object_not_found",
                    "code": "HE_02",
                    "message": "Payment provider 'stripe' does not exist"
                }
            })
        );
    }

    #[test]
    fn rejected_callback_has_no_body() {
        let response = ApiErrorResponse::CallbackRejected.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.into_body().try_into_bytes().unwrap().is_empty());
    }
}
