//! Connector integration interface

pub mod api;
pub mod configs;
pub mod consts;
pub mod errors;
pub mod types;
pub mod webhooks;
