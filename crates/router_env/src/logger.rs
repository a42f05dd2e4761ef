//!
//! Logger of the system.
//!

pub use tracing::{debug, error, event as log, info, warn};
pub use tracing_attributes::instrument;

pub mod config;
mod setup;
pub use setup::{setup, TelemetryGuard};

pub mod types;
pub use types::Flow;
