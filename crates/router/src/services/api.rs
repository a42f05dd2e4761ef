use std::{fmt::Debug, future::Future, time::Instant};

use actix_web::{body, http::header::ContentType, web, HttpRequest, HttpResponse, ResponseError};
use error_stack::Report;
use router_env::{logger, Flow};
use serde::Serialize;

use crate::{core::errors, routes::AppState};

#[derive(Debug, Eq, PartialEq)]
pub enum ApplicationResponse<R> {
    Json(R),
    TextPlain(String),
}

/// Runs `func` for one API request and turns its outcome into an HTTP response.
pub async fn server_wrap<T, Q, F, Fut>(
    flow: Flow,
    state: web::Data<AppState>,
    request: &HttpRequest,
    payload: T,
    func: F,
) -> HttpResponse
where
    F: FnOnce(AppState, T) -> Fut,
    Fut: Future<Output = errors::RouterResponse<Q>>,
    Q: Serialize + Debug,
    T: Debug,
{
    let start_instant = Instant::now();
    logger::info!(
        %flow,
        request_method = request.method().as_str(),
        request_url_path = request.path(),
        payload = ?payload,
        "Begin request"
    );

    let res = match func(state.get_ref().clone(), payload).await {
        Ok(ApplicationResponse::Json(response)) => match serde_json::to_string(&response) {
            Ok(res) => http_response_json(res),
            Err(_) => http_response_err(
                r#"{
                    "error": {
                        "message": "Error serializing response"
                    }
                }"#,
            ),
        },
        Ok(ApplicationResponse::TextPlain(text)) => http_response_plaintext(text),
        Err(error) => log_and_return_error_response(error),
    };

    logger::info!(
        status_code = res.status().as_u16(),
        time_taken_ms = start_instant.elapsed().as_millis(),
        "End request"
    );

    res
}

pub fn log_and_return_error_response(error: Report<errors::ApiErrorResponse>) -> HttpResponse {
    logger::error!(?error);
    error.current_context().error_response()
}

pub fn http_response_json<T: body::MessageBody + 'static>(response: T) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(response)
}

pub fn http_response_plaintext<T: body::MessageBody + 'static>(res: T) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(res)
}

pub fn http_response_err<T: body::MessageBody + 'static>(response: T) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(ContentType::json())
        .body(response)
}
