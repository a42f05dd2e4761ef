use common_utils::errors::CustomResult;
use domain_models::{
    orders::{OrderReadOnly, OrderTransactionInfo},
    payments::{TransactionInfo, TransactionInfoUpdate},
};
use error_stack::report;
use router_env::{instrument, tracing};

use super::{MockDb, StorageError};

#[derive(Debug, Clone)]
pub enum OrderTransactionUpdate {
    /// Outcome of a verified gateway callback
    Callback(TransactionInfo),
    /// Outcome of a status fetch, capture, refund or cancel
    StatusUpdate(TransactionInfoUpdate),
}

impl OrderTransactionUpdate {
    fn apply_to(&self, transaction_info: &mut OrderTransactionInfo) {
        match self {
            Self::Callback(info) => transaction_info.apply_callback(info),
            Self::StatusUpdate(update) => transaction_info.apply_update(update),
        }
    }
}

#[async_trait::async_trait]
pub trait OrderInterface {
    async fn insert_order(&self, order: OrderReadOnly) -> CustomResult<OrderReadOnly, StorageError>;

    async fn find_order_by_order_number(
        &self,
        order_number: &str,
    ) -> CustomResult<OrderReadOnly, StorageError>;

    async fn update_order_transaction_info(
        &self,
        order_number: &str,
        update: OrderTransactionUpdate,
    ) -> CustomResult<OrderReadOnly, StorageError>;
}

#[async_trait::async_trait]
impl OrderInterface for MockDb {
    #[instrument(skip_all)]
    async fn insert_order(&self, order: OrderReadOnly) -> CustomResult<OrderReadOnly, StorageError> {
        let mut orders = self.orders.lock().await;
        if orders
            .iter()
            .any(|existing| existing.order_number == order.order_number)
        {
            return Err(report!(StorageError::DuplicateValue {
                entity: "order",
                key: Some(order.order_number),
            }));
        }
        orders.push(order.clone());
        Ok(order)
    }

    #[instrument(skip_all)]
    async fn find_order_by_order_number(
        &self,
        order_number: &str,
    ) -> CustomResult<OrderReadOnly, StorageError> {
        let orders = self.orders.lock().await;
        orders
            .iter()
            .find(|order| order.order_number == order_number)
            .cloned()
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "No order available with order_number = {order_number}"
                )))
            })
    }

    #[instrument(skip_all)]
    async fn update_order_transaction_info(
        &self,
        order_number: &str,
        update: OrderTransactionUpdate,
    ) -> CustomResult<OrderReadOnly, StorageError> {
        let mut orders = self.orders.lock().await;
        let order = orders
            .iter_mut()
            .find(|order| order.order_number == order_number)
            .ok_or_else(|| {
                report!(StorageError::ValueNotFound(format!(
                    "No order available with order_number = {order_number}"
                )))
            })?;
        update.apply_to(&mut order.transaction_info);
        Ok(order.clone())
    }
}
