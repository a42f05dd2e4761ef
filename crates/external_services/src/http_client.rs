//! Sending connector requests over HTTP

use std::{str::FromStr, time::Duration};

use common_utils::{
    consts,
    errors::CustomResult,
    request::{Headers, Method, Request, RequestContent},
};
use connector_interfaces::{errors::HttpClientError, types::Response};
use error_stack::{report, ResultExt};
use router_env::{instrument, logger, tracing};

/// client module
pub mod client;

/// Sends `request` and returns the raw `reqwest` response, whatever its status.
///
/// The timeout defaults to [`consts::REQUEST_TIME_OUT`] seconds. Requests are never retried.
#[instrument(skip_all)]
pub async fn send_request(
    client: &reqwest::Client,
    request: Request,
    option_timeout_secs: Option<u64>,
) -> CustomResult<reqwest::Response, HttpClientError> {
    logger::info!(method=?request.method, headers=?request.headers, payload=?request.body, url=%request.url);

    let url = url::Url::parse(&request.url)
        .change_context(HttpClientError::UrlParsingFailed)
        .attach_printable_lazy(|| format!("url: {}", request.url))?;
    let headers = construct_header_map(request.headers)?;

    let request_builder = match request.method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
    };
    let request_builder = match request.body {
        Some(RequestContent::Json(payload)) => request_builder.json(&payload),
        None => request_builder,
    }
    .headers(headers)
    .timeout(Duration::from_secs(
        option_timeout_secs.unwrap_or(consts::REQUEST_TIME_OUT),
    ));

    request_builder
        .send()
        .await
        .map_err(|error| match error {
            error if error.is_timeout() => report!(HttpClientError::RequestTimeoutReceived),
            error => report!(HttpClientError::RequestNotSent(error.to_string())),
        })
        .attach_printable("Unable to send request to connector")
}

/// Sends `request` and reads the whole body.
///
/// A 2xx answer is returned as `Ok`, any other status as `Err`, both wrapped in the outer
/// transport result.
#[instrument(skip_all)]
pub async fn call_connector_api(
    client: &reqwest::Client,
    request: Request,
) -> CustomResult<Result<Response, Response>, HttpClientError> {
    let response = send_request(client, request, None).await?;

    let status_code = response.status().as_u16();
    let headers = Some(response.headers().to_owned());
    let body = response
        .bytes()
        .await
        .change_context(HttpClientError::ResponseDecodingFailed)
        .attach_printable("Error while waiting for response")?;
    logger::debug!(status_code, "connector responded");

    let response = Response {
        headers,
        response: body,
        status_code,
    };
    Ok(match status_code {
        200..=299 => Ok(response),
        _ => Err(response),
    })
}

fn construct_header_map(
    headers: Headers,
) -> CustomResult<reqwest::header::HeaderMap, HttpClientError> {
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

    headers
        .into_iter()
        .try_fold(HeaderMap::new(), |mut header_map, (name, value)| {
            let name = HeaderName::from_str(&name)
                .change_context(HttpClientError::HeaderMapConstructionFailed)?;
            let value = HeaderValue::from_str(&value.into_inner())
                .change_context(HttpClientError::HeaderMapConstructionFailed)?;
            header_map.append(name, value);
            Ok(header_map)
        })
}
