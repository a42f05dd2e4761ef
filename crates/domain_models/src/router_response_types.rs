use common_enums::PaymentStatus;
use common_utils::types::MinorUnit;

/// Outcome flag and messages carried by every gateway response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayMeta {
    pub result: bool,
    /// Message meant for the paying customer
    pub end_user_message: Option<String>,
    /// Message meant for the merchant
    pub merchant_message: Option<String>,
}

impl GatewayMeta {
    /// The most specific message available for an operator log
    pub fn diagnostic(&self) -> Option<&str> {
        self.merchant_message
            .as_deref()
            .or(self.end_user_message.as_deref())
            .filter(|message| !message.trim().is_empty())
    }
}

/// A gateway response: `data` is present only when `meta.result` holds
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse<T> {
    pub meta: GatewayMeta,
    pub data: Option<T>,
}

impl<T> GatewayResponse<T> {
    pub fn is_success(&self) -> bool {
        self.meta.result
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub token: Option<String>,
    /// Where the customer is redirected to complete the payment
    pub url: String,
}

/// The gateway's authoritative record of a payment
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub order_id: Option<String>,
    pub merchant_number: Option<String>,
    /// Free-text gateway status, informational only
    pub gateway_status: Option<String>,
    pub totals: TransactionTotals,
    pub available: AvailableAmounts,
    /// Canonical status derived from `totals`
    pub payment_status: PaymentStatus,
}

/// Cumulative counters of a transaction, in minor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionTotals {
    pub authorized: MinorUnit,
    pub balance: MinorUnit,
    pub captured: MinorUnit,
    pub credited: MinorUnit,
    pub declined: MinorUnit,
    pub fee_amount: MinorUnit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailableAmounts {
    pub capture: MinorUnit,
    pub credit: MinorUnit,
}

/// Acknowledgement of a capture, credit or delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionAction {
    pub transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_prefers_merchant_message() {
        let meta = GatewayMeta {
            result: false,
            end_user_message: Some("Payment declined".to_string()),
            merchant_message: Some("Card expired".to_string()),
        };
        assert_eq!(meta.diagnostic(), Some("Card expired"));

        let meta = GatewayMeta {
            merchant_message: None,
            ..meta
        };
        assert_eq!(meta.diagnostic(), Some("Payment declined"));
    }

    #[test]
    fn blank_diagnostic_is_dropped() {
        let meta = GatewayMeta {
            result: false,
            end_user_message: None,
            merchant_message: Some("  ".to_string()),
        };
        assert_eq!(meta.diagnostic(), None);
    }
}
