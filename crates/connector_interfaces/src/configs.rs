//! Configs interface

use serde::Deserialize;

/// Hosts of every supported connector
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Connectors {
    /// Bambora Europe Checkout
    pub bambora: ConnectorParamsWithSecondaryBaseUrls,
}

impl Default for Connectors {
    fn default() -> Self {
        Self {
            bambora: ConnectorParamsWithSecondaryBaseUrls {
                base_url: "https://api.v1.checkout.bambora.com/".to_string(),
                merchant_base_url: "https://merchant-v1.api-eu.bambora.com/".to_string(),
                transaction_base_url: "https://transaction-v1.api-eu.bambora.com/".to_string(),
            },
        }
    }
}

/// Hosts of a connector which splits its API over several domains.
///
/// Every URL is expected to end with `/`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConnectorParamsWithSecondaryBaseUrls {
    /// Host for session creation
    pub base_url: String,
    /// Host for merchant queries, such as reading a transaction
    pub merchant_base_url: String,
    /// Host for transaction operations, such as capture
    pub transaction_base_url: String,
}
