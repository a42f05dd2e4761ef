use serde::{Deserialize, Serialize};

/// The local, canonical state of a payment.
///
/// Always derived from the gateway's transaction totals, never from the
/// gateway's free-text status.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Initialized,
    Authorized,
    Captured,
    Refunded,
    Cancelled,
}

/// Which credential set the gateway client is configured with.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GatewayMode {
    #[default]
    Test,
    Live,
}

impl GatewayMode {
    pub fn from_test_mode(test_mode: bool) -> Self {
        if test_mode {
            Self::Test
        } else {
            Self::Live
        }
    }
}
