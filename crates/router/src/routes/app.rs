use std::{collections::HashMap, sync::Arc};

use actix_web::{web, Scope};
use error_stack::report;
use external_services::http_client::client;
use payment_providers::{BamboraProvider, ProviderVariant};
use strum::IntoEnumIterator;

use super::{health::*, orders::*, payments::*};
use crate::{
    configs::settings,
    core::errors::{self, ApplicationError, ApplicationResult},
    db::{MockDb, StorageInterface},
};

#[derive(Clone)]
pub struct AppState {
    pub conf: Arc<settings::Settings>,
    pub store: Arc<dyn StorageInterface>,
    providers: Arc<HashMap<ProviderVariant, BamboraProvider>>,
}

impl AppState {
    /// Creates the state with an in-memory order store.
    pub fn new(conf: settings::Settings) -> ApplicationResult<Self> {
        Self::with_storage(conf, Arc::new(MockDb::new()))
    }

    pub fn with_storage(
        conf: settings::Settings,
        store: Arc<dyn StorageInterface>,
    ) -> ApplicationResult<Self> {
        let http_client =
            client::create_client(&conf.proxy).map_err(ApplicationError::ApiClientError)?;

        let providers = ProviderVariant::iter()
            .map(|variant| {
                let provider = BamboraProvider::new(
                    variant,
                    conf.bambora.clone(),
                    conf.connectors.clone(),
                    http_client.clone(),
                );
                (variant, provider)
            })
            .collect();

        Ok(Self {
            conf: Arc::new(conf),
            store,
            providers: Arc::new(providers),
        })
    }

    /// Provider registered under `alias`, such as `bambora-checkout`.
    pub fn get_provider(&self, alias: &str) -> errors::RouterResult<&BamboraProvider> {
        alias
            .parse::<ProviderVariant>()
            .ok()
            .and_then(|variant| self.providers.get(&variant))
            .ok_or_else(|| {
                report!(errors::ApiErrorResponse::ProviderNotFound {
                    provider: alias.to_string(),
                })
            })
    }
}

pub struct Health;

impl Health {
    pub fn server(state: AppState) -> Scope {
        web::scope("/health")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::get().to(health)))
    }
}

pub struct Orders;

impl Orders {
    pub fn server(state: AppState) -> Scope {
        web::scope("/orders")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::post().to(orders_create)))
            .service(web::resource("/{order_number}").route(web::get().to(orders_retrieve)))
    }
}

pub struct Payments;

impl Payments {
    pub fn server(state: AppState) -> Scope {
        web::scope("/payments/{provider}/{order_number}")
            .app_data(web::Data::new(state))
            .service(web::resource("/form").route(web::post().to(payments_form)))
            .service(web::resource("/callback").route(web::get().to(payments_callback)))
            .service(web::resource("/sync").route(web::post().to(payments_sync)))
            .service(web::resource("/capture").route(web::post().to(payments_capture)))
            .service(web::resource("/cancel").route(web::post().to(payments_cancel)))
            .service(web::resource("/refund").route(web::post().to(payments_refund)))
    }
}
