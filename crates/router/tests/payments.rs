#![allow(clippy::unwrap_used)]

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test,
};
use connector_interfaces::{
    configs::{ConnectorParamsWithSecondaryBaseUrls, Connectors},
    webhooks::CallbackParameters,
};
use masking::Secret;
use payment_connectors::connectors::bambora::transformers::BamboraCredentials;
use payment_providers::BamboraSettings;
use router::{
    configs::settings::{Server, Settings},
    routes::AppState,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

const MD5_KEY: &str = "md5-secret";
const BODY_LIMIT: usize = 16 * 1024;

fn settings(server: &MockServer) -> Settings {
    let gateway = format!("{}/", server.uri());
    Settings {
        server: Server {
            base_url: "https://shop.example".to_string(),
            ..Default::default()
        },
        connectors: Connectors {
            bambora: ConnectorParamsWithSecondaryBaseUrls {
                base_url: format!("{gateway}checkout/"),
                merchant_base_url: format!("{gateway}merchant/"),
                transaction_base_url: format!("{gateway}transaction/"),
            },
        },
        bambora: BamboraSettings {
            continue_url: Some("https://shop.example/continue".to_string()),
            cancel_url: Some("https://shop.example/cancel".to_string()),
            error_url: Some("https://shop.example/error".to_string()),
            test: BamboraCredentials {
                merchant_number: Some(Secret::new("T123".to_string())),
                access_key: Some(Secret::new("access".to_string())),
                secret_key: Some(Secret::new("secret".to_string())),
                md5_key: Some(Secret::new(MD5_KEY.to_string())),
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn app(
    settings: Settings,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let state = AppState::new(settings).unwrap();
    test::init_service(router::mk_app(state, BODY_LIMIT)).await
}

fn order(order_number: &str) -> Value {
    json!({
        "order_number": order_number,
        "currency_code": "DKK",
        "customer_email": "customer@shop.example",
        "transaction_amount": "100.00"
    })
}

fn signed_query(query: &str) -> String {
    let message: String = CallbackParameters::from_query(query)
        .iter()
        .map(|(_, value)| value)
        .collect();
    let hash = format!("{:x}", md5::compute(format!("{message}{MD5_KEY}")));
    format!("{query}&hash={hash}")
}

fn transaction_body(authorized: i64, captured: i64) -> Value {
    json!({
        "meta": { "result": true },
        "transaction": {
            "id": "txn-42",
            "orderid": "A1002",
            "total": { "authorized": authorized, "captured": captured, "feeamount": 150 }
        }
    })
}

fn accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "meta": { "result": true } }))
}

#[actix_web::test]
async fn health_is_good() {
    let server = MockServer::start().await;
    let app = app(settings(&server)).await;

    let response = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(test::read_body(response).await, "health is good");
}

#[actix_web::test]
async fn orders_are_registered_once() {
    let server = MockServer::start().await;
    let app = app(settings(&server)).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order("A-7"))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);

    let duplicate = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order("A-7"))
            .to_request(),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let retrieved: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/orders/A-7").to_request(),
    )
    .await;
    assert_eq!(retrieved["order_number"], "A-7");
    assert_eq!(retrieved["transaction_amount"], "100.00");

    let missing = test::call_service(
        &app,
        test::TestRequest::get().uri("/orders/A-8").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn checkout_callback_and_capture() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkout/sessions"))
        .and(body_partial_json(json!({
            "order": { "id": "A1002", "amount": 10000, "currency": "DKK" },
            "url": {
                "callbacks": [
                    { "url": "https://shop.example/payments/bambora-checkout/%23A-1002/callback" }
                ]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "result": true },
            "token": "tok_1",
            "url": "https://v1.checkout.bambora.com/tok_1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/merchant/transactions/txn-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transaction_body(10150, 0)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transaction/transactions/txn-42/capture"))
        .and(body_json(json!({ "amount": 10150 })))
        .respond_with(accepted())
        .expect(1)
        .mount(&server)
        .await;
    let app = app(settings(&server)).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order("#A-1002"))
            .to_request(),
    )
    .await;

    let form: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/payments/bambora-checkout/%23A-1002/form")
            .to_request(),
    )
    .await;
    assert_eq!(
        form,
        json!({ "action_url": "https://v1.checkout.bambora.com/tok_1", "method": "GET" })
    );

    let callback: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!(
                "/payments/bambora-checkout/%23A-1002/callback?{}",
                signed_query("txnid=txn-42&orderid=A1002&amount=10000&currency=208&txnfee=150")
            ))
            .to_request(),
    )
    .await;
    assert_eq!(
        callback,
        json!({
            "transaction_id": "txn-42",
            "amount_authorized": "101.50",
            "transaction_fee": "1.50",
            "payment_status": "authorized"
        })
    );

    let capture: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/payments/bambora-checkout/%23A-1002/capture")
            .to_request(),
    )
    .await;
    assert_eq!(capture["success"], true);
    assert_eq!(capture["transaction_info"]["payment_status"], "captured");

    let stored: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/orders/%23A-1002").to_request(),
    )
    .await;
    assert_eq!(
        stored["transaction_info"],
        json!({
            "transaction_id": "txn-42",
            "amount_authorized": "101.50",
            "transaction_fee": "1.50",
            "payment_status": "captured"
        })
    );
}

#[actix_web::test]
async fn forged_callback_is_a_bare_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transaction_body(10000, 0)))
        .expect(0)
        .mount(&server)
        .await;
    let app = app(settings(&server)).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order("A1002"))
            .to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/payments/bambora-checkout/A1002/callback?txnid=txn-42&orderid=A1002&amount=10000&hash=0000")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(test::read_body(response).await.is_empty());
}

#[actix_web::test]
async fn callback_for_unknown_order_or_provider_is_a_bare_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transaction_body(10000, 0)))
        .expect(0)
        .mount(&server)
        .await;
    let app = app(settings(&server)).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order("A1002"))
            .to_request(),
    )
    .await;
    let query = signed_query("txnid=txn-42&orderid=A1002&amount=10000&txnfee=150");

    for uri in [
        format!("/payments/bambora-checkout/A9999/callback?{query}"),
        format!("/payments/stripe/A1002/callback?{query}"),
    ] {
        let response =
            test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(test::read_body(response).await.is_empty());
    }
}

#[actix_web::test]
async fn refused_session_is_reported_to_the_customer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkout/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "result": false, "message": { "enduser": "Payment not possible" } }
        })))
        .mount(&server)
        .await;
    let app = app(settings(&server)).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order("A1002"))
            .to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/payments/bambora-checkout/A1002/form")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"]["code"], "CE_01");
    assert_eq!(body["error"]["message"], "Payment not possible");
}

#[actix_web::test]
async fn legacy_refund_is_an_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(accepted())
        .expect(0)
        .mount(&server)
        .await;
    let app = app(settings(&server)).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order("A1002"))
            .to_request(),
    )
    .await;

    let refund: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/payments/bambora/A1002/refund")
            .to_request(),
    )
    .await;

    assert_eq!(
        refund,
        json!({
            "success": false,
            "transaction_info": null,
            "diagnostic": "RefundPayment is not supported by bambora"
        })
    );
}

#[actix_web::test]
async fn unknown_provider_is_not_found() {
    let server = MockServer::start().await;
    let app = app(settings(&server)).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/payments/stripe/A1002/sync")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
