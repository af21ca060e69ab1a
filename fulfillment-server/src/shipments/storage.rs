//! redb-based order store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `order_id` | `Order` | Order records (history embedded) |
//! | `open_orders` | `order_id` | `()` | Orders still moving through fulfillment |
//! | `processed_checkouts` | `checkout_id` | `order_id` | Checkout idempotency |
//! | `counters` | `()` | `u64` | Crash-safe order numbering |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so a power loss never leaves an order with its
//! status and history tail disagreeing: both live in the same record and are
//! written by the same commit.
//!
//! # Concurrency
//!
//! redb allows a single write transaction at a time, which gives
//! `apply_transition` the per-order serialization the lifecycle needs.
//! Transition legality is re-checked against the stored record *inside* the
//! write transaction, so a stale caller loses cleanly with
//! `InvalidTransition` instead of clobbering a newer state.

use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
    WriteTransaction,
};
use serde::{Deserialize, Serialize};
use shared::{Order, ParcelSize, ShippingLabel, TrackingEvent};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::error::{ShipmentError, ShipmentResult};

/// Table for order records: key = order_id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Table for open (not yet delivered) orders: key = order_id, value = empty
const OPEN_ORDERS_TABLE: TableDefinition<&str, ()> = TableDefinition::new("open_orders");

/// Table for processed checkouts: key = checkout_id, value = order_id
/// Guarantees exactly one order per completed checkout
const PROCESSED_CHECKOUTS_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("processed_checkouts");

/// Table for counters: key = counter name, value = u64
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const ORDER_COUNT_KEY: &str = "order_count";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Order already exists: {0}")]
    DuplicateOrder(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Which transacting party is asking for the order list.
///
/// Every order is visible to both parties; the role only affects ordering
/// and is the seam where real authorization would attach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewerRole {
    Buyer,
    Seller,
}

/// Field updates merged together with a transition.
///
/// Only the label-registration transition carries updates; plain status
/// advances leave both fields empty.
#[derive(Debug, Clone, Default)]
pub struct TransitionUpdates {
    pub parcel_size: Option<ParcelSize>,
    pub label: Option<ShippingLabel>,
}

impl TransitionUpdates {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Order store backed by redb
#[derive(Clone)]
pub struct OrderStore {
    db: Arc<Database>,
}

impl OrderStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(OPEN_ORDERS_TABLE)?;
            let _ = write_txn.open_table(PROCESSED_CHECKOUTS_TABLE)?;

            let mut counters = write_txn.open_table(COUNTERS_TABLE)?;
            if counters.get(ORDER_COUNT_KEY)?.is_none() {
                counters.insert(ORDER_COUNT_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(OPEN_ORDERS_TABLE)?;
            let _ = write_txn.open_table(PROCESSED_CHECKOUTS_TABLE)?;
            let mut counters = write_txn.open_table(COUNTERS_TABLE)?;
            counters.insert(ORDER_COUNT_KEY, 0u64)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Begin a write transaction
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Order Counter ==========

    /// Get and increment the order count atomically.
    /// Returns the NEW count after increment (crash-safe numbering).
    pub fn next_order_count(&self) -> StorageResult<u64> {
        let txn = self.db.begin_write()?;
        let mut table = txn.open_table(COUNTERS_TABLE)?;
        let current = table.get(ORDER_COUNT_KEY)?.map(|g| g.value()).unwrap_or(0);
        let next = current + 1;
        table.insert(ORDER_COUNT_KEY, next)?;
        drop(table);
        txn.commit()?;
        Ok(next)
    }

    // ========== Checkout Idempotency ==========

    /// Order created for a checkout, if that checkout was already processed
    pub fn checkout_order(&self, checkout_id: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROCESSED_CHECKOUTS_TABLE)?;
        Ok(table.get(checkout_id)?.map(|g| g.value().to_string()))
    }

    /// Same lookup, within a write transaction
    pub fn checkout_order_txn(
        &self,
        txn: &WriteTransaction,
        checkout_id: &str,
    ) -> StorageResult<Option<String>> {
        let table = txn.open_table(PROCESSED_CHECKOUTS_TABLE)?;
        Ok(table.get(checkout_id)?.map(|g| g.value().to_string()))
    }

    /// Record which order a checkout produced
    pub fn mark_checkout_processed(
        &self,
        txn: &WriteTransaction,
        checkout_id: &str,
        order_id: &str,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(PROCESSED_CHECKOUTS_TABLE)?;
        table.insert(checkout_id, order_id)?;
        Ok(())
    }

    // ========== Order Operations ==========

    /// Insert a brand-new order (within transaction).
    ///
    /// Fails with `DuplicateOrder` if the id is already taken; ids are
    /// generated from the crash-safe counter so this should never fire.
    pub fn insert_order_txn(&self, txn: &WriteTransaction, order: &Order) -> StorageResult<()> {
        let mut orders = txn.open_table(ORDERS_TABLE)?;
        if orders.get(order.id.as_str())?.is_some() {
            return Err(StorageError::DuplicateOrder(order.id.clone()));
        }
        let value = serde_json::to_vec(order)?;
        orders.insert(order.id.as_str(), value.as_slice())?;
        drop(orders);

        let mut open = txn.open_table(OPEN_ORDERS_TABLE)?;
        open.insert(order.id.as_str(), ())?;
        Ok(())
    }

    /// Insert a brand-new order in its own transaction
    pub fn create(&self, order: &Order) -> StorageResult<()> {
        let txn = self.begin_write()?;
        self.insert_order_txn(&txn, order)?;
        txn.commit()?;
        Ok(())
    }

    /// Get an order by id
    pub fn get_order(&self, order_id: &str) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => {
                let order: Order = serde_json::from_slice(value.value())?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    /// Get an order by id (within transaction)
    pub fn get_order_txn(
        &self,
        txn: &WriteTransaction,
        order_id: &str,
    ) -> StorageResult<Option<Order>> {
        let table = txn.open_table(ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => {
                let order: Order = serde_json::from_slice(value.value())?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    /// Overwrite an order record (within transaction)
    fn store_order_txn(&self, txn: &WriteTransaction, order: &Order) -> StorageResult<()> {
        let mut table = txn.open_table(ORDERS_TABLE)?;
        let value = serde_json::to_vec(order)?;
        table.insert(order.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get all orders
    pub fn get_all_orders(&self) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let order: Order = serde_json::from_slice(value.value())?;
            orders.push(order);
        }

        Ok(orders)
    }

    /// Get all open (not yet delivered) order ids
    pub fn get_open_order_ids(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(OPEN_ORDERS_TABLE)?;

        let mut order_ids = Vec::new();
        for result in table.iter()? {
            let (key, _value) = result?;
            order_ids.push(key.value().to_string());
        }

        Ok(order_ids)
    }

    /// Orders visible to a buyer or seller view.
    ///
    /// Both parties see every order. Buyers read newest-first; sellers get
    /// orders still waiting on them (registration pending) ahead of the rest.
    pub fn list_for_viewer(&self, role: ViewerRole) -> StorageResult<Vec<Order>> {
        let mut orders = self.get_all_orders()?;
        match role {
            ViewerRole::Buyer => {
                orders.sort_by_key(|o| std::cmp::Reverse(o.created_at));
            }
            ViewerRole::Seller => {
                orders.sort_by_key(|o| {
                    let needs_action = o.status == shared::OrderStatus::AwaitingRegistration;
                    (!needs_action, std::cmp::Reverse(o.created_at))
                });
            }
        }
        Ok(orders)
    }

    // ========== Transitions ==========

    /// The single mutation entry point after creation.
    ///
    /// Atomically appends `event` to the order's history, updates the
    /// denormalized status, and merges `updates`, all in one committed
    /// write. Legality is validated against the record as stored, so
    /// concurrent callers cannot interleave: redb serializes writers and a
    /// loser of the race observes the winner's state.
    pub fn apply_transition(
        &self,
        order_id: &str,
        event: TrackingEvent,
        updates: TransitionUpdates,
    ) -> ShipmentResult<Order> {
        let txn = self.begin_write()?;

        let mut order = self
            .get_order_txn(&txn, order_id)?
            .ok_or_else(|| ShipmentError::NotFound(order_id.to_string()))?;

        // A second registration must fail as "already registered", not as a
        // generic illegal transition
        if updates.label.is_some() && order.label.is_some() {
            return Err(ShipmentError::AlreadyRegistered(order_id.to_string()));
        }

        if !order.status.can_transition_to(event.status) {
            return Err(ShipmentError::InvalidTransition {
                order_id: order_id.to_string(),
                from: order.status,
                to: event.status,
            });
        }

        // History timestamps never decrease, even if the wall clock steps
        // backwards between transitions
        let mut event = event;
        if let Some(last) = order.last_event() {
            event.timestamp = event.timestamp.max(last.timestamp);
        }

        order.status = event.status;
        order.updated_at = event.timestamp;
        if let Some(size) = updates.parcel_size {
            order.parcel_size = Some(size);
        }
        if let Some(label) = updates.label {
            order.label = Some(label);
        }
        order.tracking_history.push(event);

        self.store_order_txn(&txn, &order)?;

        if order.status.is_terminal() {
            let mut open = txn.open_table(OPEN_ORDERS_TABLE).map_err(StorageError::from)?;
            open.remove(order_id).map_err(StorageError::from)?;
        }

        txn.commit().map_err(StorageError::from)?;
        Ok(order)
    }

    // ========== Statistics ==========

    /// Get storage statistics
    pub fn get_stats(&self) -> StorageResult<StoreStats> {
        let read_txn = self.db.begin_read()?;

        let orders = read_txn.open_table(ORDERS_TABLE)?;
        let open = read_txn.open_table(OPEN_ORDERS_TABLE)?;
        let checkouts = read_txn.open_table(PROCESSED_CHECKOUTS_TABLE)?;

        Ok(StoreStats {
            order_count: orders.len()?,
            open_order_count: open.len()?,
            processed_checkout_count: checkouts.len()?,
        })
    }
}

/// Storage statistics
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub order_count: u64,
    pub open_order_count: u64,
    pub processed_checkout_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::types::{CarrierType, ListingSnapshot, Locker, PaymentMethod, SellerInfo};
    use shared::{OrderStatus, TrackingEvent};

    fn test_locker(carrier: CarrierType) -> Locker {
        Locker {
            id: "D1".to_string(),
            name: "DPD paštomatas - IKI Girstupis".to_string(),
            address: "Kovo 11-osios g. 22".to_string(),
            city: "Kaunas".to_string(),
            carrier,
        }
    }

    fn test_order(order_id: &str, created_at: i64) -> Order {
        Order::confirmed(
            order_id.to_string(),
            ListingSnapshot {
                listing_id: "2".to_string(),
                title: "Audi A4 B8 LED Žibintas (Kairys)".to_string(),
                price: 120.0,
                image_url: "https://example.test/zibintas.jpg".to_string(),
                seller: SellerInfo {
                    name: "Andrius R.".to_string(),
                    rating: 4.5,
                    review_count: 5,
                },
            },
            test_locker(CarrierType::Dpd),
            PaymentMethod::Card,
            "472913".to_string(),
            created_at,
        )
    }

    fn label_event(order: &Order, timestamp: i64) -> TrackingEvent {
        TrackingEvent::announce(OrderStatus::LabelReady, &order.destination, timestamp)
    }

    fn test_label() -> ShippingLabel {
        ShippingLabel {
            tracking_number: "DPD88112233LT".to_string(),
            label_url: "https://example.test/label.png".to_string(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-1", 1_000);

        store.create(&order).unwrap();

        let loaded = store.get_order("ORD-1").unwrap().unwrap();
        assert_eq!(loaded, order);
        assert!(store.get_order("ORD-missing").unwrap().is_none());
    }

    #[test]
    fn test_create_duplicate_id_fails() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-1", 1_000);

        store.create(&order).unwrap();
        let result = store.create(&order);
        assert!(matches!(result, Err(StorageError::DuplicateOrder(id)) if id == "ORD-1"));
    }

    #[test]
    fn test_new_order_is_open() {
        let store = OrderStore::open_in_memory().unwrap();
        store.create(&test_order("ORD-1", 1_000)).unwrap();

        let open = store.get_open_order_ids().unwrap();
        assert_eq!(open, vec!["ORD-1".to_string()]);
    }

    #[test]
    fn test_apply_transition_appends_and_updates_status() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-1", 1_000);
        store.create(&order).unwrap();

        let event = label_event(&order, 2_000);
        let updated = store
            .apply_transition(
                "ORD-1",
                event,
                TransitionUpdates {
                    parcel_size: Some(ParcelSize::M),
                    label: Some(test_label()),
                },
            )
            .unwrap();

        assert_eq!(updated.status, OrderStatus::LabelReady);
        assert_eq!(updated.tracking_history.len(), 2);
        assert_eq!(updated.last_event().unwrap().status, OrderStatus::LabelReady);
        assert_eq!(updated.parcel_size, Some(ParcelSize::M));
        assert_eq!(updated.tracking_number(), Some("DPD88112233LT"));

        // Persisted record matches the returned one
        let loaded = store.get_order("ORD-1").unwrap().unwrap();
        assert_eq!(loaded, updated);
    }

    #[test]
    fn test_apply_transition_rejects_illegal_jump() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-1", 1_000);
        store.create(&order).unwrap();

        // AwaitingRegistration → InTransit skips label generation
        let event = TrackingEvent::announce(OrderStatus::InTransit, &order.destination, 2_000);
        let result = store.apply_transition("ORD-1", event, TransitionUpdates::none());

        assert!(matches!(
            result,
            Err(ShipmentError::InvalidTransition { from, to, .. })
                if from == OrderStatus::AwaitingRegistration && to == OrderStatus::InTransit
        ));

        // Nothing was appended
        let loaded = store.get_order("ORD-1").unwrap().unwrap();
        assert_eq!(loaded.tracking_history.len(), 1);
        assert_eq!(loaded.status, OrderStatus::AwaitingRegistration);
    }

    #[test]
    fn test_apply_transition_rejects_second_registration() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-1", 1_000);
        store.create(&order).unwrap();

        let event = label_event(&order, 2_000);
        store
            .apply_transition(
                "ORD-1",
                event,
                TransitionUpdates {
                    parcel_size: Some(ParcelSize::S),
                    label: Some(test_label()),
                },
            )
            .unwrap();

        let again = label_event(&order, 3_000);
        let result = store.apply_transition(
            "ORD-1",
            again,
            TransitionUpdates {
                parcel_size: Some(ParcelSize::L),
                label: Some(ShippingLabel {
                    tracking_number: "DPD99999999LT".to_string(),
                    label_url: "https://example.test/other.png".to_string(),
                }),
            },
        );
        assert!(matches!(result, Err(ShipmentError::AlreadyRegistered(_))));

        // Tracking number unchanged, history unchanged
        let loaded = store.get_order("ORD-1").unwrap().unwrap();
        assert_eq!(loaded.tracking_number(), Some("DPD88112233LT"));
        assert_eq!(loaded.tracking_history.len(), 2);
    }

    #[test]
    fn test_apply_transition_missing_order() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-ghost", 1_000);
        let event = label_event(&order, 2_000);

        let result = store.apply_transition("ORD-ghost", event, TransitionUpdates::none());
        assert!(matches!(result, Err(ShipmentError::NotFound(_))));
    }

    #[test]
    fn test_timestamps_never_decrease() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-1", 5_000);
        store.create(&order).unwrap();

        // Event stamped before the creation event (clock stepped back)
        let event = label_event(&order, 4_000);
        let updated = store
            .apply_transition(
                "ORD-1",
                event,
                TransitionUpdates {
                    parcel_size: Some(ParcelSize::M),
                    label: Some(test_label()),
                },
            )
            .unwrap();

        let timestamps: Vec<i64> = updated
            .tracking_history
            .iter()
            .map(|e| e.timestamp)
            .collect();
        assert_eq!(timestamps, vec![5_000, 5_000]);
    }

    #[test]
    fn test_delivered_order_leaves_open_index() {
        let store = OrderStore::open_in_memory().unwrap();
        let order = test_order("ORD-1", 1_000);
        store.create(&order).unwrap();

        let steps = [
            (
                OrderStatus::LabelReady,
                TransitionUpdates {
                    parcel_size: Some(ParcelSize::M),
                    label: Some(test_label()),
                },
            ),
            (OrderStatus::InTransit, TransitionUpdates::none()),
            (OrderStatus::ReadyForPickup, TransitionUpdates::none()),
            (OrderStatus::Delivered, TransitionUpdates::none()),
        ];
        for (i, (status, updates)) in steps.into_iter().enumerate() {
            let event =
                TrackingEvent::announce(status, &order.destination, 2_000 + i as i64 * 1_000);
            store.apply_transition("ORD-1", event, updates).unwrap();
        }

        assert!(store.get_open_order_ids().unwrap().is_empty());

        let loaded = store.get_order("ORD-1").unwrap().unwrap();
        assert_eq!(loaded.status, OrderStatus::Delivered);
        assert_eq!(loaded.tracking_history.len(), 5);

        // Full history timestamps are non-decreasing
        let mut prev = i64::MIN;
        for event in &loaded.tracking_history {
            assert!(event.timestamp >= prev);
            prev = event.timestamp;
        }
    }

    #[test]
    fn test_checkout_idempotency_index() {
        let store = OrderStore::open_in_memory().unwrap();
        assert!(store.checkout_order("chk-1").unwrap().is_none());

        let txn = store.begin_write().unwrap();
        store.mark_checkout_processed(&txn, "chk-1", "ORD-1").unwrap();
        txn.commit().unwrap();

        assert_eq!(
            store.checkout_order("chk-1").unwrap().as_deref(),
            Some("ORD-1")
        );
    }

    #[test]
    fn test_order_counter_increments() {
        let store = OrderStore::open_in_memory().unwrap();
        assert_eq!(store.next_order_count().unwrap(), 1);
        assert_eq!(store.next_order_count().unwrap(), 2);
        assert_eq!(store.next_order_count().unwrap(), 3);
    }

    #[test]
    fn test_list_for_viewer_buyer_newest_first() {
        let store = OrderStore::open_in_memory().unwrap();
        store.create(&test_order("ORD-old", 1_000)).unwrap();
        store.create(&test_order("ORD-new", 9_000)).unwrap();

        let orders = store.list_for_viewer(ViewerRole::Buyer).unwrap();
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-new", "ORD-old"]);
    }

    #[test]
    fn test_list_for_viewer_seller_pending_first() {
        let store = OrderStore::open_in_memory().unwrap();
        let registered = test_order("ORD-registered", 9_000);
        store.create(&registered).unwrap();
        store.create(&test_order("ORD-pending", 1_000)).unwrap();

        let event = label_event(&registered, 9_500);
        store
            .apply_transition(
                "ORD-registered",
                event,
                TransitionUpdates {
                    parcel_size: Some(ParcelSize::S),
                    label: Some(test_label()),
                },
            )
            .unwrap();

        // The older order still needs registration, so the seller sees it first
        let orders = store.list_for_viewer(ViewerRole::Seller).unwrap();
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-pending", "ORD-registered"]);
    }

    #[test]
    fn test_stats() {
        let store = OrderStore::open_in_memory().unwrap();
        store.create(&test_order("ORD-1", 1_000)).unwrap();
        store.create(&test_order("ORD-2", 2_000)).unwrap();

        let txn = store.begin_write().unwrap();
        store.mark_checkout_processed(&txn, "chk-1", "ORD-1").unwrap();
        txn.commit().unwrap();

        let stats = store.get_stats().unwrap();
        assert_eq!(stats.order_count, 2);
        assert_eq!(stats.open_order_count, 2);
        assert_eq!(stats.processed_checkout_count, 1);
    }

    #[test]
    fn test_reopen_from_disk_preserves_orders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.redb");

        {
            let store = OrderStore::open(&path).unwrap();
            store.create(&test_order("ORD-1", 1_000)).unwrap();
        }

        let store = OrderStore::open(&path).unwrap();
        let loaded = store.get_order("ORD-1").unwrap().unwrap();
        assert_eq!(loaded.status, OrderStatus::AwaitingRegistration);
        assert_eq!(loaded.tracking_history.len(), 1);
    }
}
