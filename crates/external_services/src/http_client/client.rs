use std::time::Duration;

use common_utils::errors::CustomResult;
use connector_interfaces::{errors::HttpClientError, types::Proxy};
use error_stack::ResultExt;
use router_env::logger;

/// Builds the pooled client shared by every connector call.
///
/// Redirects are not followed, the gateway answers with JSON only.
pub fn create_client(proxy_config: &Proxy) -> CustomResult<reqwest::Client, HttpClientError> {
    get_client_builder(proxy_config)?
        .build()
        .change_context(HttpClientError::ClientConstructionFailed)
        .attach_printable("Failed to construct base client")
}

/// Client builder with the configured proxies applied
pub fn get_client_builder(
    proxy_config: &Proxy,
) -> CustomResult<reqwest::ClientBuilder, HttpClientError> {
    let mut client_builder = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Duration::from_secs(
            proxy_config
                .idle_pool_connection_timeout
                .unwrap_or_default(),
        ));

    let proxy_exclusion_config =
        reqwest::NoProxy::from_string(&proxy_config.bypass_proxy_hosts.clone().unwrap_or_default());

    if let Some(url) = proxy_config.https_url.as_ref() {
        logger::debug!("Routing https traffic through the configured proxy");
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(HttpClientError::InvalidProxyConfiguration)
                .attach_printable("HTTPS proxy configuration error")?
                .no_proxy(proxy_exclusion_config.clone()),
        );
    }

    if let Some(url) = proxy_config.http_url.as_ref() {
        logger::debug!("Routing http traffic through the configured proxy");
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(HttpClientError::InvalidProxyConfiguration)
                .attach_printable("HTTP proxy configuration error")?
                .no_proxy(proxy_exclusion_config),
        );
    }

    Ok(client_builder)
}
