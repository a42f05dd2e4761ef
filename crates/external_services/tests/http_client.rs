#![allow(clippy::unwrap_used)]

use common_utils::request::{Method, RequestBuilder, RequestContent};
use connector_interfaces::{errors::HttpClientError, types::Proxy};
use external_services::http_client::{call_connector_api, client::create_client};
use masking::Mask;
use serde::Serialize;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[derive(Serialize)]
struct Capture {
    amount: i64,
}

#[tokio::test]
async fn json_body_and_headers_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transactions/42/capture"))
        .and(header("authorization", "Basic c2VjcmV0"))
        .and(body_json(serde_json::json!({ "amount": 10000 })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"meta":{"result":true}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestBuilder::new()
        .method(Method::Post)
        .url(&format!("{}/transactions/42/capture", server.uri()))
        .attach_default_headers()
        .headers(vec![(
            "Authorization".to_string(),
            "Basic c2VjcmV0".to_string().into_masked(),
        )])
        .set_body(RequestContent::Json(Box::new(Capture { amount: 10000 })))
        .build();

    let client = create_client(&Proxy::default()).unwrap();
    let response = call_connector_api(&client, request).await.unwrap().unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(&response.response[..], br#"{"meta":{"result":true}}"#);
}

#[tokio::test]
async fn non_success_status_is_returned_as_error_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let request = RequestBuilder::new()
        .method(Method::Get)
        .url(&format!("{}/transactions/unknown", server.uri()))
        .build();

    let client = create_client(&Proxy::default()).unwrap();
    let response = call_connector_api(&client, request).await.unwrap().unwrap_err();

    assert_eq!(response.status_code, 404);
    assert_eq!(&response.response[..], b"not found");
}

#[tokio::test]
async fn malformed_url_is_rejected_before_sending() {
    let request = RequestBuilder::new().url("not a url").build();

    let client = create_client(&Proxy::default()).unwrap();
    let error = call_connector_api(&client, request).await.unwrap_err();

    assert_eq!(error.current_context(), &HttpClientError::UrlParsingFailed);
}
