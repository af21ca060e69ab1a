//! ShipmentManager - transition driving and label registration
//!
//! The manager is the only writer of persisted order records. Every
//! operation follows the same shape:
//!
//! ```text
//! operation(order_id)
//!     ├─ 1. Cheap pre-checks on the current record (clear errors early)
//!     ├─ 2. Slow external work, if any (label generator, bounded by timeout)
//!     ├─ 3. apply_transition: re-validate + append event + update status
//!     │     in one committed write
//!     └─ 4. Broadcast the committed event
//! ```
//!
//! The slow carrier call happens before the write transaction, never inside
//! it; the in-transaction re-validation means a caller that raced someone
//! else loses with a clean error instead of corrupting the history.

use parking_lot::Mutex;
use shared::order::types::{ListingSnapshot, Locker, PaymentMethod};
use shared::util::{dropoff_code, now_millis};
use shared::{Order, OrderStatus, ParcelSize, TrackingEvent};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use super::error::{ShipmentError, ShipmentResult};
use super::label::LabelGenerator;
use super::storage::{OrderStore, StorageError, TransitionUpdates, ViewerRole};

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Committed order change fanned out to subscribers (buyer/seller views)
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub order_id: String,
    pub status: OrderStatus,
    pub event: TrackingEvent,
}

/// Removes the order id from the in-flight set when the registration
/// attempt ends, success or not.
struct RegistrationGuard<'a> {
    registering: &'a Mutex<HashSet<String>>,
    order_id: String,
}

impl<'a> RegistrationGuard<'a> {
    fn try_acquire(registering: &'a Mutex<HashSet<String>>, order_id: &str) -> Option<Self> {
        let mut set = registering.lock();
        if !set.insert(order_id.to_string()) {
            return None;
        }
        Some(Self {
            registering,
            order_id: order_id.to_string(),
        })
    }
}

impl Drop for RegistrationGuard<'_> {
    fn drop(&mut self) {
        self.registering.lock().remove(&self.order_id);
    }
}

/// Shipment lifecycle manager
pub struct ShipmentManager {
    store: OrderStore,
    labels: Arc<dyn LabelGenerator>,
    label_timeout: Duration,
    event_tx: broadcast::Sender<OrderUpdate>,
    /// Orders with a carrier registration call in flight. At most one slow
    /// generator call per order; everything else is serialized by the store.
    registering: Mutex<HashSet<String>>,
}

impl ShipmentManager {
    pub fn new(store: OrderStore, labels: Arc<dyn LabelGenerator>, label_timeout: Duration) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            labels,
            label_timeout,
            event_tx,
            registering: Mutex::new(HashSet::new()),
        }
    }

    /// Subscribe to committed order updates
    pub fn subscribe(&self) -> broadcast::Receiver<OrderUpdate> {
        self.event_tx.subscribe()
    }

    /// Get the underlying store
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Generate the next order id (crash-safe via the store counter)
    fn next_order_id(&self) -> ShipmentResult<String> {
        let count = self.store.next_order_count()?;
        let date_str = chrono::Utc::now().format("%Y%m%d").to_string();
        Ok(format!("ORD{}{}", date_str, 10_000 + count))
    }

    // ========== Order Creation ==========

    /// Create the order for a completed checkout.
    ///
    /// Exactly one order exists per checkout: replaying a processed checkout
    /// id returns the order it created the first time. The fresh order
    /// starts in `AwaitingRegistration` with the "order confirmed" event
    /// already in its history.
    pub fn create_order(
        &self,
        checkout_id: &str,
        listing: ListingSnapshot,
        destination: Locker,
        payment_method: PaymentMethod,
    ) -> ShipmentResult<Order> {
        if let Some(existing) = self.store.checkout_order(checkout_id)? {
            tracing::info!(
                checkout_id,
                order_id = %existing,
                "Checkout already processed, returning existing order"
            );
            return self.get_order(&existing);
        }

        let id = self.next_order_id()?;
        let order = Order::confirmed(
            id,
            listing,
            destination,
            payment_method,
            dropoff_code(),
            now_millis(),
        );

        let txn = self.store.begin_write()?;
        // Double-check inside the transaction; two concurrent submissions of
        // the same checkout must still produce exactly one order
        if let Some(existing) = self.store.checkout_order_txn(&txn, checkout_id)? {
            drop(txn);
            return self.get_order(&existing);
        }
        match self.store.insert_order_txn(&txn, &order) {
            Err(StorageError::DuplicateOrder(id)) => {
                // Counter-generated ids never repeat; this is a bug, not a
                // user error
                tracing::error!(order_id = %id, "Order id collision on create");
                return Err(ShipmentError::DuplicateId(id));
            }
            other => other?,
        }
        self.store
            .mark_checkout_processed(&txn, checkout_id, &order.id)?;
        txn.commit().map_err(StorageError::from)?;

        tracing::info!(
            order_id = %order.id,
            checkout_id,
            locker = %order.destination.name,
            "Order created"
        );
        self.broadcast(&order);
        Ok(order)
    }

    // ========== Transitions ==========

    /// Register the shipment with the carrier.
    ///
    /// Idempotent per order: once a label exists the call is rejected with
    /// `AlreadyRegistered` instead of silently regenerating a tracking
    /// number. Generator failure or timeout leaves the order in
    /// `AwaitingRegistration`; the seller retries by calling again.
    pub async fn register_shipment(
        &self,
        order_id: &str,
        size: ParcelSize,
    ) -> ShipmentResult<Order> {
        let _guard = RegistrationGuard::try_acquire(&self.registering, order_id)
            .ok_or_else(|| ShipmentError::RegistrationInProgress(order_id.to_string()))?;

        let order = self.get_order(order_id)?;
        if order.is_registered() {
            return Err(ShipmentError::AlreadyRegistered(order_id.to_string()));
        }
        if !order.status.can_transition_to(OrderStatus::LabelReady) {
            return Err(ShipmentError::InvalidTransition {
                order_id: order_id.to_string(),
                from: order.status,
                to: OrderStatus::LabelReady,
            });
        }

        // The carrier call is the only slow part of the lifecycle; it runs
        // outside the write transaction with an explicit timeout
        let label = match tokio::time::timeout(
            self.label_timeout,
            self.labels.register_shipment(order_id, size),
        )
        .await
        {
            Ok(Ok(label)) => label,
            Ok(Err(e)) => {
                tracing::warn!(order_id, error = %e, "Label generation failed, order stays registerable");
                return Err(ShipmentError::Generator(e.to_string()));
            }
            Err(_) => {
                tracing::warn!(
                    order_id,
                    timeout_ms = self.label_timeout.as_millis() as u64,
                    "Label generation timed out"
                );
                return Err(ShipmentError::Generator(format!(
                    "timed out after {}ms",
                    self.label_timeout.as_millis()
                )));
            }
        };

        let event = TrackingEvent::announce(OrderStatus::LabelReady, &order.destination, now_millis());
        let updated = self.store.apply_transition(
            order_id,
            event,
            TransitionUpdates {
                parcel_size: Some(size),
                label: Some(label),
            },
        )?;

        tracing::info!(
            order_id,
            tracking_number = ?updated.tracking_number(),
            "Shipment registered"
        );
        self.broadcast(&updated);
        Ok(updated)
    }

    /// Seller confirmed the parcel is in the locker
    pub fn mark_shipped(&self, order_id: &str) -> ShipmentResult<Order> {
        self.advance(order_id, OrderStatus::InTransit)
    }

    /// Carrier signalled arrival at the destination locker (manual/admin
    /// trigger; no carrier webhook is ingested here)
    pub fn mark_ready_for_pickup(&self, order_id: &str) -> ShipmentResult<Order> {
        self.advance(order_id, OrderStatus::ReadyForPickup)
    }

    /// Buyer collected the parcel
    pub fn confirm_delivery(&self, order_id: &str) -> ShipmentResult<Order> {
        self.advance(order_id, OrderStatus::Delivered)
    }

    fn advance(&self, order_id: &str, to: OrderStatus) -> ShipmentResult<Order> {
        let order = self.get_order(order_id)?;
        if !order.status.can_transition_to(to) {
            return Err(ShipmentError::InvalidTransition {
                order_id: order_id.to_string(),
                from: order.status,
                to,
            });
        }

        let event = TrackingEvent::announce(to, &order.destination, now_millis());
        let updated = self
            .store
            .apply_transition(order_id, event, TransitionUpdates::none())?;

        tracing::info!(order_id, status = ?updated.status, "Order advanced");
        self.broadcast(&updated);
        Ok(updated)
    }

    // ========== Queries ==========

    /// Get an order by id
    pub fn get_order(&self, order_id: &str) -> ShipmentResult<Order> {
        self.store
            .get_order(order_id)?
            .ok_or_else(|| ShipmentError::NotFound(order_id.to_string()))
    }

    /// Orders visible to the given viewer
    pub fn list_for_viewer(&self, role: ViewerRole) -> ShipmentResult<Vec<Order>> {
        Ok(self.store.list_for_viewer(role)?)
    }

    fn broadcast(&self, order: &Order) {
        let Some(event) = order.last_event() else {
            return;
        };
        let update = OrderUpdate {
            order_id: order.id.clone(),
            status: order.status,
            event: event.clone(),
        };
        if self.event_tx.send(update).is_err() {
            tracing::debug!(order_id = %order.id, "No active update subscribers");
        }
    }
}
