pub mod orders;

use std::sync::Arc;

use domain_models::orders::OrderReadOnly;
use futures::lock::Mutex;

pub use self::orders::{OrderInterface, OrderTransactionUpdate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("ValueNotFound: {0}")]
    ValueNotFound(String),
    #[error("DuplicateValue: {entity} already exists {key:?}")]
    DuplicateValue {
        entity: &'static str,
        key: Option<String>,
    },
}

pub trait StorageInterface: Send + Sync + OrderInterface + 'static {}

/// In-memory store standing in for the host's order database
#[derive(Debug, Clone, Default)]
pub struct MockDb {
    pub orders: Arc<Mutex<Vec<OrderReadOnly>>>,
}

impl MockDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageInterface for MockDb {}
