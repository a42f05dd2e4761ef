use connector_interfaces::errors::ConnectorError;

/// Errors raised by a payment provider.
///
/// Only configuration and validation errors reach the caller; every other variant is turned into
/// a typed result by the provider and logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Missing provider configuration: {field_name}")]
    MissingConfiguration { field_name: &'static str },
    #[error("Currency must be a valid ISO 4217 currency code: {currency}")]
    InvalidCurrency { currency: String },
    #[error("Amount could not be converted to minor units")]
    AmountConversionFailed,
    #[error("Gateway rejected the request: {message}")]
    GatewayRejected { message: String },
    #[error("Gateway call failed")]
    GatewayCallFailed,
    #[error("Callback signature could not be verified")]
    CallbackAuthenticationFailed,
    #[error("Invalid callback: {reason}")]
    InvalidCallback { reason: &'static str },
    #[error("Order has no {field_name} recorded")]
    MissingTransactionDetails { field_name: &'static str },
    #[error("{operation} is not supported by {provider}")]
    OperationNotSupported {
        operation: &'static str,
        provider: &'static str,
    },
}

pub trait ConnectorErrorExt {
    /// A gateway refusal keeps the customer-facing message, anything else is a failed call.
    fn to_provider_failed_response(self) -> error_stack::Report<ProviderError>;

    /// Like [`Self::to_provider_failed_response`], but a refusal prefers the merchant-facing
    /// message when the gateway sent one.
    fn to_provider_operation_response(self) -> error_stack::Report<ProviderError>;
}

impl ConnectorErrorExt for error_stack::Report<ConnectorError> {
    fn to_provider_failed_response(self) -> error_stack::Report<ProviderError> {
        let error = match self.current_context() {
            ConnectorError::FailedAtConnector { message, .. } => ProviderError::GatewayRejected {
                message: message.clone(),
            },
            _ => ProviderError::GatewayCallFailed,
        };
        self.change_context(error)
    }

    fn to_provider_operation_response(self) -> error_stack::Report<ProviderError> {
        let error = match self.current_context() {
            ConnectorError::FailedAtConnector {
                message, reason, ..
            } => ProviderError::GatewayRejected {
                message: reason
                    .as_deref()
                    .filter(|reason| !reason.trim().is_empty())
                    .unwrap_or(message.as_str())
                    .to_string(),
            },
            _ => ProviderError::GatewayCallFailed,
        };
        self.change_context(error)
    }
}

#[cfg(test)]
mod tests {
    use error_stack::report;

    use super::*;

    #[test]
    fn connector_refusal_becomes_gateway_rejection() {
        let error = report!(ConnectorError::FailedAtConnector {
            message: "Card expired".to_string(),
            code: "402".to_string(),
            reason: Some("Card expired 03/24".to_string()),
        })
        .to_provider_failed_response();

        assert_eq!(
            error.current_context(),
            &ProviderError::GatewayRejected {
                message: "Card expired".to_string()
            }
        );
    }

    #[test]
    fn operation_refusal_prefers_merchant_message() {
        let refusal = |reason: Option<&str>| {
            report!(ConnectorError::FailedAtConnector {
                message: "Capture failed".to_string(),
                code: "400".to_string(),
                reason: reason.map(str::to_string),
            })
            .to_provider_operation_response()
        };

        assert_eq!(
            refusal(Some("Amount exceeds authorized")).current_context(),
            &ProviderError::GatewayRejected {
                message: "Amount exceeds authorized".to_string()
            }
        );
        assert_eq!(
            refusal(Some(" ")).current_context(),
            &ProviderError::GatewayRejected {
                message: "Capture failed".to_string()
            }
        );
        assert_eq!(
            refusal(None).current_context(),
            &ProviderError::GatewayRejected {
                message: "Capture failed".to_string()
            }
        );
    }

    #[test]
    fn transport_failure_becomes_failed_call() {
        let error = report!(ConnectorError::ProcessingStepFailed(None)).to_provider_failed_response();

        assert_eq!(error.current_context(), &ProviderError::GatewayCallFailed);
    }
}
