use shared::OrderStatus;
use thiserror::Error;

use super::storage::StorageError;

/// Shipment lifecycle errors
///
/// Everything here is recoverable at the caller except `DuplicateId`, which
/// signals a broken id-generation invariant and is logged loudly where it is
/// detected. No variant ever leaves a persisted order with its status
/// disagreeing with the tail of its tracking history.
#[derive(Debug, Error)]
pub enum ShipmentError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order id already exists: {0}")]
    DuplicateId(String),

    #[error("Illegal transition for order {order_id}: {from:?} -> {to:?}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Shipment already registered for order {0}")]
    AlreadyRegistered(String),

    #[error("Shipment registration already in progress for order {0}")]
    RegistrationInProgress(String),

    #[error("Label generator failed: {0}")]
    Generator(String),

    #[error("Payment was not confirmed")]
    PaymentNotConfirmed,
}

pub type ShipmentResult<T> = Result<T, ShipmentError>;
