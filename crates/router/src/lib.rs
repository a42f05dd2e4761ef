#![forbid(unsafe_code)]

pub mod configs;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;

use actix_web::{
    body::MessageBody,
    dev::{Server, ServiceFactory, ServiceRequest},
    ResponseError,
};
pub use router_env::logger;

use crate::{
    configs::settings,
    core::errors::{ApiErrorResponse, ApplicationResult},
    routes::AppState,
};

pub fn mk_app(
    state: AppState,
    request_body_limit: usize,
) -> actix_web::App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let mut server_app = get_application_builder(request_body_limit);

    server_app = server_app
        .service(routes::Health::server(state.clone()))
        .service(routes::Orders::server(state.clone()))
        .service(routes::Payments::server(state));

    server_app
}

/// Builds the application state and binds the HTTP server.
pub async fn start_server(conf: settings::Settings) -> ApplicationResult<Server> {
    logger::debug!(startup_config=?conf);
    let server = conf.server.clone();
    let state = AppState::new(conf)?;
    let request_body_limit = server.request_body_limit;

    let server = actix_web::HttpServer::new(move || mk_app(state.clone(), request_body_limit))
        .bind((server.host.as_str(), server.port))?
        .workers(server.workers)
        .shutdown_timeout(server.shutdown_timeout)
        .run();
    Ok(server)
}

pub fn get_application_builder(
    request_body_limit: usize,
) -> actix_web::App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_cfg = actix_web::web::JsonConfig::default()
        .limit(request_body_limit)
        .content_type_required(true)
        .error_handler(|error, _request| {
            let response = ApiErrorResponse::InvalidRequestData {
                message: error.to_string(),
            }
            .error_response();
            actix_web::error::InternalError::from_response(error, response).into()
        });

    actix_web::App::new().app_data(json_cfg)
}
