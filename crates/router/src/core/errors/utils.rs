use payment_providers::errors::ProviderError;

use crate::{core::errors, db::StorageError};

pub trait StorageErrorExt<T, E> {
    #[track_caller]
    fn to_not_found_response(self, not_found_response: E) -> error_stack::Result<T, E>;

    #[track_caller]
    fn to_duplicate_response(self, duplicate_response: E) -> error_stack::Result<T, E>;
}

impl<T> StorageErrorExt<T, errors::ApiErrorResponse> for error_stack::Result<T, StorageError> {
    #[track_caller]
    fn to_not_found_response(
        self,
        not_found_response: errors::ApiErrorResponse,
    ) -> error_stack::Result<T, errors::ApiErrorResponse> {
        self.map_err(|err| {
            let new_err = match err.current_context() {
                StorageError::ValueNotFound(_) => not_found_response,
                _ => errors::ApiErrorResponse::InternalServerError,
            };
            err.change_context(new_err)
        })
    }

    #[track_caller]
    fn to_duplicate_response(
        self,
        duplicate_response: errors::ApiErrorResponse,
    ) -> error_stack::Result<T, errors::ApiErrorResponse> {
        self.map_err(|err| {
            let new_err = match err.current_context() {
                StorageError::DuplicateValue { .. } => duplicate_response,
                _ => errors::ApiErrorResponse::InternalServerError,
            };
            err.change_context(new_err)
        })
    }
}

pub trait ProviderErrorExt<T> {
    #[track_caller]
    fn to_api_error_response(self) -> errors::RouterResult<T>;
}

impl<T> ProviderErrorExt<T> for error_stack::Result<T, ProviderError> {
    #[track_caller]
    fn to_api_error_response(self) -> errors::RouterResult<T> {
        self.map_err(|err| {
            let new_err = match err.current_context() {
                ProviderError::InvalidCurrency { .. } | ProviderError::AmountConversionFailed => {
                    errors::ApiErrorResponse::InvalidRequestData {
                        message: err.current_context().to_string(),
                    }
                }
                ProviderError::GatewayRejected { message } => {
                    errors::ApiErrorResponse::PaymentFailed {
                        message: message.clone(),
                    }
                }
                ProviderError::GatewayCallFailed => errors::ApiErrorResponse::GatewayUnavailable,
                ProviderError::MissingTransactionDetails { field_name } => {
                    errors::ApiErrorResponse::MissingTransactionDetails {
                        field_name: *field_name,
                    }
                }
                ProviderError::CallbackAuthenticationFailed
                | ProviderError::InvalidCallback { .. } => {
                    errors::ApiErrorResponse::CallbackRejected
                }
                ProviderError::MissingConfiguration { .. }
                | ProviderError::OperationNotSupported { .. } => {
                    errors::ApiErrorResponse::InternalServerError
                }
            };
            err.change_context(new_err)
        })
    }
}
