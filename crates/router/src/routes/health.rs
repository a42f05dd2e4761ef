use actix_web::{web, HttpRequest, HttpResponse};
use router_env::{instrument, logger, tracing, Flow};

use super::app::AppState;
use crate::services::api::{self, ApplicationResponse};

#[instrument(skip_all, fields(flow = ?Flow::HealthCheck))]
pub async fn health(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    Box::pin(api::server_wrap(
        Flow::HealthCheck,
        state,
        &req,
        (),
        |_, _| async {
            logger::info!("Health was called");
            Ok(ApplicationResponse::<()>::TextPlain("health is good".to_string()))
        },
    ))
    .await
}
