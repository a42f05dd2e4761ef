//! Webhooks interface for the connector integrations

use std::collections::HashMap;

use common_utils::{crypto::GenerateDigest, errors::CustomResult};
use error_stack::ResultExt;
use masking::Secret;

use crate::{api::ConnectorCommon, errors};

/// Query parameters of an incoming callback, kept in the order they were received.
///
/// Keys are matched case-insensitively. A repeated key keeps the position of its first
/// occurrence and its values are joined with `,`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParameters {
    parameters: Vec<(String, String)>,
    /// Lowercased key to its position in `parameters`
    index: HashMap<String, usize>,
}

impl CallbackParameters {
    /// Parses an `application/x-www-form-urlencoded` query string.
    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Builds the parameters from already decoded key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut parameters: Vec<(String, String)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (key, value) in pairs {
            let (key, value): (String, String) = (key.into(), value.into());
            let lowercase_key = key.to_ascii_lowercase();
            let position = index.get(&lowercase_key).copied();
            match position.and_then(|position| parameters.get_mut(position)) {
                Some((_, existing_value)) => {
                    existing_value.push(',');
                    existing_value.push_str(&value);
                }
                None => {
                    index.insert(lowercase_key, parameters.len());
                    parameters.push((key, value));
                }
            }
        }
        Self { parameters, index }
    }

    /// Value of `key`, matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(&key.to_ascii_lowercase())
            .and_then(|&position| self.parameters.get(position))
            .map(|(_, value)| value.as_str())
    }

    /// Parameters in the order they were received.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Trait for verifying the source of incoming gateway callbacks
pub trait IncomingWebhook: ConnectorCommon + Sync {
    /// Digest used to sign the callback
    fn get_webhook_source_verification_algorithm(
        &self,
    ) -> CustomResult<Box<dyn GenerateDigest + Send>, errors::ConnectorError>;

    /// Signature sent along with the callback, `None` when absent or blank
    fn get_webhook_source_verification_signature(
        &self,
        request: &CallbackParameters,
    ) -> CustomResult<Option<String>, errors::ConnectorError>;

    /// Message the signature was computed over
    fn get_webhook_source_verification_message(
        &self,
        request: &CallbackParameters,
        secret: &Secret<String>,
    ) -> CustomResult<Vec<u8>, errors::ConnectorError>;

    /// Recomputes the signature as lowercase hex and compares it with the one received.
    fn verify_webhook_source(
        &self,
        request: &CallbackParameters,
        secret: &Secret<String>,
    ) -> CustomResult<bool, errors::ConnectorError> {
        let Some(signature) = self.get_webhook_source_verification_signature(request)? else {
            return Ok(false);
        };
        let message = self.get_webhook_source_verification_message(request, secret)?;
        let digest = self
            .get_webhook_source_verification_algorithm()?
            .generate_hex_digest(&message)
            .change_context(errors::ConnectorError::WebhookSourceVerificationFailed)?;

        Ok(digest == signature)
    }
}
