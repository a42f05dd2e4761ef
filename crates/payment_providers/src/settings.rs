//! Provider settings, as configured by the merchant

use common_enums::GatewayMode;
use common_utils::errors::CustomResult;
use error_stack::{report, ResultExt};
use payment_connectors::connectors::bambora::transformers::{
    BamboraClientConfig, BamboraCredentials,
};
use serde::Deserialize;

use crate::errors::ProviderError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BamboraSettings {
    pub continue_url: Option<String>,
    pub cancel_url: Option<String>,
    pub error_url: Option<String>,
    pub test: BamboraCredentials,
    pub live: BamboraCredentials,
    /// Payment window language, e.g. `da-DK`
    pub language: Option<String>,
    /// Capture the full amount as soon as it is authorized
    pub capture: bool,
    pub test_mode: bool,
    /// Comma separated payment method ids
    pub excluded_payment_methods: Option<String>,
    /// Comma separated payment group ids
    pub excluded_payment_groups: Option<String>,
    /// Comma separated payment type ids
    pub excluded_payment_types: Option<String>,
}

impl Default for BamboraSettings {
    fn default() -> Self {
        Self {
            continue_url: None,
            cancel_url: None,
            error_url: None,
            test: BamboraCredentials::default(),
            live: BamboraCredentials::default(),
            language: None,
            capture: false,
            test_mode: true,
            excluded_payment_methods: None,
            excluded_payment_groups: None,
            excluded_payment_types: None,
        }
    }
}

impl BamboraSettings {
    pub fn get_continue_url(&self) -> CustomResult<&str, ProviderError> {
        required_url(self.continue_url.as_deref(), "continue_url")
    }

    pub fn get_cancel_url(&self) -> CustomResult<&str, ProviderError> {
        required_url(self.cancel_url.as_deref(), "cancel_url")
    }

    pub fn get_error_url(&self) -> CustomResult<&str, ProviderError> {
        required_url(self.error_url.as_deref(), "error_url")
    }

    pub fn gateway_mode(&self) -> GatewayMode {
        GatewayMode::from_test_mode(self.test_mode)
    }

    /// Credentials of the active mode
    pub fn get_client_config(&self) -> CustomResult<BamboraClientConfig, ProviderError> {
        BamboraClientConfig::select(self.gateway_mode(), &self.test, &self.live).change_context(
            ProviderError::MissingConfiguration {
                field_name: "credentials",
            },
        )
    }

    pub fn get_excluded_payment_methods(&self) -> Vec<String> {
        split_exclusion_list(self.excluded_payment_methods.as_deref())
    }

    pub fn get_excluded_payment_groups(&self) -> Vec<String> {
        split_exclusion_list(self.excluded_payment_groups.as_deref())
    }

    pub fn get_excluded_payment_types(&self) -> Vec<String> {
        split_exclusion_list(self.excluded_payment_types.as_deref())
    }
}

fn required_url<'a>(
    url: Option<&'a str>,
    field_name: &'static str,
) -> CustomResult<&'a str, ProviderError> {
    url.filter(|url| !url.trim().is_empty())
        .ok_or_else(|| report!(ProviderError::MissingConfiguration { field_name }))
}

/// Splits a comma separated setting, trimming entries and dropping blank ones.
pub fn split_exclusion_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use masking::{PeekInterface, Secret};
    use test_case::test_case;

    use super::*;

    fn credentials(merchant_number: &str) -> BamboraCredentials {
        BamboraCredentials {
            merchant_number: Some(Secret::new(merchant_number.to_string())),
            access_key: Some(Secret::new("access".to_string())),
            secret_key: Some(Secret::new("secret".to_string())),
            md5_key: Some(Secret::new("md5".to_string())),
        }
    }

    #[test_case(None, &[]; "unset")]
    #[test_case(Some(""), &[]; "empty")]
    #[test_case(Some(" , ,"), &[]; "only separators")]
    #[test_case(Some("1, 7 ,,12"), &["1", "7", "12"]; "trimmed and blanks dropped")]
    fn exclusion_lists_are_split(value: Option<&str>, expected: &[&str]) {
        assert_eq!(split_exclusion_list(value), expected);
    }

    #[test]
    fn missing_urls_are_configuration_errors() {
        let settings = BamboraSettings {
            continue_url: Some("https://shop.example/continue".to_string()),
            cancel_url: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            settings.get_continue_url().unwrap(),
            "https://shop.example/continue"
        );
        assert_eq!(
            settings.get_cancel_url().unwrap_err().current_context(),
            &ProviderError::MissingConfiguration {
                field_name: "cancel_url"
            }
        );
        assert!(settings.get_error_url().is_err());
    }

    #[test]
    fn test_mode_selects_test_credentials() {
        let mut settings = BamboraSettings {
            test: credentials("T1"),
            live: credentials("L1"),
            ..Default::default()
        };
        assert_eq!(
            settings.get_client_config().unwrap().merchant_number().peek(),
            "T1"
        );

        settings.test_mode = false;
        assert_eq!(
            settings.get_client_config().unwrap().merchant_number().peek(),
            "L1"
        );
    }

    #[test]
    fn missing_credentials_are_configuration_errors() {
        let settings = BamboraSettings {
            test_mode: false,
            test: credentials("T1"),
            ..Default::default()
        };

        assert_eq!(
            settings.get_client_config().unwrap_err().current_context(),
            &ProviderError::MissingConfiguration {
                field_name: "credentials"
            }
        );
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: BamboraSettings = serde_json::from_str(
            r#"{"capture":true,"test":{"merchant_number":"T1"},"excluded_payment_types":"2,3"}"#,
        )
        .unwrap();

        assert!(settings.capture);
        assert!(settings.test_mode);
        assert_eq!(settings.get_excluded_payment_types(), vec!["2", "3"]);
        assert!(settings.live.access_key.is_none());
    }
}
