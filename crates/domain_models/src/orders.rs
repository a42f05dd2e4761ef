//! The host's view of an order, as handed to a payment provider

use common_enums::PaymentStatus;
use masking::Secret;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payments::{TransactionInfo, TransactionInfoUpdate};

/// Read-only order snapshot
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderReadOnly {
    pub order_number: String,
    pub currency_code: String,
    pub customer_email: Option<Secret<String>>,
    /// Total to charge, in major units
    pub transaction_amount: Decimal,
    #[serde(default)]
    pub transaction_info: OrderTransactionInfo,
}

/// Payment details recorded on an order by earlier provider calls
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTransactionInfo {
    pub transaction_id: Option<String>,
    pub amount_authorized: Option<Decimal>,
    pub transaction_fee: Option<Decimal>,
    pub payment_status: Option<PaymentStatus>,
}

impl OrderTransactionInfo {
    /// Records the outcome of a verified callback
    pub fn apply_callback(&mut self, info: &TransactionInfo) {
        self.transaction_id = Some(info.transaction_id.clone());
        self.amount_authorized = Some(info.amount_authorized);
        self.transaction_fee = Some(info.transaction_fee);
        self.payment_status = Some(info.payment_status);
    }

    /// Records the outcome of a status fetch, capture, refund or cancel
    pub fn apply_update(&mut self, update: &TransactionInfoUpdate) {
        if let Some(transaction_id) = &update.transaction_id {
            self.transaction_id = Some(transaction_id.clone());
        }
        self.payment_status = Some(update.payment_status);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn order_without_transaction_info_deserializes() {
        let order: OrderReadOnly = serde_json::from_str(
            r##"{"order_number":"#A-1002","currency_code":"DKK","customer_email":null,"transaction_amount":"100.00"}"##,
        )
        .unwrap();

        assert_eq!(order.transaction_amount, Decimal::new(10000, 2));
        assert_eq!(order.transaction_info, OrderTransactionInfo::default());
    }

    #[test]
    fn update_keeps_known_transaction_id() {
        let mut info = OrderTransactionInfo {
            transaction_id: Some("txn-1".to_string()),
            payment_status: Some(PaymentStatus::Authorized),
            ..Default::default()
        };

        info.apply_update(&TransactionInfoUpdate {
            transaction_id: None,
            payment_status: PaymentStatus::Captured,
        });

        assert_eq!(info.transaction_id.as_deref(), Some("txn-1"));
        assert_eq!(info.payment_status, Some(PaymentStatus::Captured));
    }

    #[test]
    fn callback_overwrites_amounts() {
        let mut info = OrderTransactionInfo::default();

        info.apply_callback(&TransactionInfo {
            transaction_id: "txn-1".to_string(),
            amount_authorized: Decimal::new(10150, 2),
            transaction_fee: Decimal::new(150, 2),
            payment_status: PaymentStatus::Authorized,
        });

        assert_eq!(info.amount_authorized, Some(Decimal::new(10150, 2)));
        assert_eq!(info.transaction_fee, Some(Decimal::new(150, 2)));
    }
}
