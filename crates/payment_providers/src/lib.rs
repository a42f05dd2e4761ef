//! Payment provider adapters

pub mod bambora;
pub mod capabilities;
pub mod client;
pub mod errors;
pub mod services;
pub mod settings;

pub use self::{
    bambora::BamboraProvider,
    capabilities::{ProviderCapabilities, ProviderVariant},
    client::GatewayClient,
    settings::BamboraSettings,
};
