//! Connector integrations

pub mod connectors;
pub mod constants;
