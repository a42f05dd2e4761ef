//! Outgoing HTTP request description, independent of the HTTP client used to send it.

use masking::Maskable;
use serde::{Deserialize, Serialize};

/// Request headers, with sensitive values masked
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

/// HTTP method of an outgoing request
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum Method {
    Get,
    Post,
}

/// Returns the default request headers as an array of tuples containing header names and values.
fn default_request_headers() -> [(String, Maskable<String>); 1] {
    use http::header;

    [(header::VIA.to_string(), "bambora-connector".to_string().into())]
}

/// A fully built outgoing request
#[derive(Debug)]
pub struct Request {
    /// Absolute URL
    pub url: String,
    /// Headers to attach
    pub headers: Headers,
    /// HTTP method
    pub method: Method,
    /// Optional body
    pub body: Option<RequestContent>,
}

/// Body of an outgoing request
pub enum RequestContent {
    /// Serialized as `application/json`
    Json(Box<dyn masking::ErasedMaskSerialize + Send>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
        })
    }
}

/// Builder for [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
    url: String,
    headers: Headers,
    method: Method,
    body: Option<RequestContent>,
}

impl RequestBuilder {
    /// Creates a new builder defaulting to a `GET` request.
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the URL for the HTTP request.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the method for the request.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Extends the headers with the default request headers.
    pub fn attach_default_headers(mut self) -> Self {
        self.headers.extend(default_request_headers());
        self
    }

    /// Adds the provided headers to the existing headers of the request.
    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets the body of the request.
    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    /// Sets the body of the request if one is given.
    pub fn set_optional_body<T: Into<RequestContent>>(mut self, body: Option<T>) -> Self {
        if let Some(body) = body {
            self.body.replace(body.into());
        }
        self
    }

    /// Builds the request.
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use masking::{Mask, PeekInterface};

    use super::*;

    #[test]
    fn builder_keeps_masked_headers_masked() {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url("https://example.com/sessions")
            .attach_default_headers()
            .headers(vec![
                ("Accept".to_string(), "application/json".into()),
                (
                    "Authorization".to_string(),
                    "Basic c2VjcmV0".to_string().into_masked(),
                ),
            ])
            .build();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.headers.len(), 3);

        let authorization = request
            .headers
            .iter()
            .find(|(name, _)| name == "Authorization")
            .map(|(_, value)| value.clone());

        assert!(matches!(
            authorization,
            Some(Maskable::Masked(ref secret)) if secret.peek() == "Basic c2VjcmV0"
        ));
    }

    #[test]
    fn optional_body_is_skipped_when_absent() {
        let request = RequestBuilder::new()
            .set_optional_body(None::<RequestContent>)
            .build();

        assert!(request.body.is_none());
    }
}
