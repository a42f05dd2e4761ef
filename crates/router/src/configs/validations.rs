use crate::core::errors::{ApplicationError, ApplicationResult};

impl super::settings::Server {
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.host.trim().is_empty() {
            return Err(ApplicationError::InvalidConfigurationValueError(
                "server host must not be empty".into(),
            ));
        }
        if self.workers == 0 {
            return Err(ApplicationError::InvalidConfigurationValueError(
                "server workers must be greater than zero".into(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApplicationError::InvalidConfigurationValueError(
                "server base_url must be an absolute http(s) URL".into(),
            ));
        }
        Ok(())
    }
}

impl super::settings::Settings {
    /// Checks the provider settings the payment routes depend on.
    pub(super) fn validate_bambora(&self) -> ApplicationResult<()> {
        let bambora = &self.bambora;
        bambora
            .get_continue_url()
            .and(bambora.get_cancel_url())
            .and(bambora.get_error_url())
            .and(bambora.get_client_config().map(|_| ()))
            .map_err(|error| {
                ApplicationError::InvalidConfigurationValueError(format!(
                    "bambora: {}",
                    error.current_context()
                ))
            })
    }
}
