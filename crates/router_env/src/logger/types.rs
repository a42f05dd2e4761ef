//!
//! Types.
//!

use strum::{Display, EnumString};

/// API Flow
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Flow {
    /// Health check
    HealthCheck,
    /// Register an order with the host store
    OrderCreate,
    /// Retrieve an order from the host store
    OrderRetrieve,
    /// Create a hosted checkout session and return the redirect form
    PaymentFormGenerate,
    /// Incoming gateway callback
    PaymentCallback,
    /// Refresh the payment status from the gateway
    PaymentStatusSync,
    /// Capture an authorized payment
    PaymentCapture,
    /// Cancel (void) an authorized payment
    PaymentCancel,
    /// Refund a captured payment
    PaymentRefund,
}
