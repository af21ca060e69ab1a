//! Checkout→Order bridge
//!
//! Translates a completed payment plus the buyer's chosen locker into the
//! order's initial state. Payment capture itself is external; this module
//! only consumes the boolean outcome. A failed payment produces no order,
//! never an empty or partial one.

use async_trait::async_trait;
use serde::Deserialize;
use shared::Order;
use shared::order::types::{ListingSnapshot, Locker, PaymentMethod};
use std::sync::Arc;

use super::error::{ShipmentError, ShipmentResult};
use super::manager::ShipmentManager;

/// Payment capture oracle.
///
/// No refund or partial-capture semantics; the processor either confirms
/// the full amount or it does not.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process_payment(&self, amount: f64, method: PaymentMethod) -> bool;
}

/// Fixed-outcome processor; stands in for the external payment service
pub struct StubPaymentProcessor {
    approve: bool,
}

impl StubPaymentProcessor {
    pub fn approving() -> Self {
        Self { approve: true }
    }

    pub fn declining() -> Self {
        Self { approve: false }
    }
}

#[async_trait]
impl PaymentProcessor for StubPaymentProcessor {
    async fn process_payment(&self, _amount: f64, _method: PaymentMethod) -> bool {
        self.approve
    }
}

/// A completed checkout submission
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    /// Client-supplied idempotency key; re-submitting the same id returns
    /// the order created the first time. Generated when absent.
    #[serde(default)]
    pub checkout_id: Option<String>,
    pub listing: ListingSnapshot,
    pub destination: Locker,
    pub payment_method: PaymentMethod,
    /// Amount to capture, EUR
    pub amount: f64,
}

/// Checkout→Order bridge
pub struct CheckoutBridge {
    manager: Arc<ShipmentManager>,
    payments: Arc<dyn PaymentProcessor>,
}

impl CheckoutBridge {
    pub fn new(manager: Arc<ShipmentManager>, payments: Arc<dyn PaymentProcessor>) -> Self {
        Self { manager, payments }
    }

    /// Complete a checkout: capture the payment, then create exactly one
    /// order in `AwaitingRegistration` with its first tracking event.
    pub async fn complete_checkout(&self, request: CheckoutRequest) -> ShipmentResult<Order> {
        let checkout_id = request
            .checkout_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let paid = self
            .payments
            .process_payment(request.amount, request.payment_method)
            .await;
        if !paid {
            tracing::warn!(
                %checkout_id,
                amount = request.amount,
                "Payment not confirmed, no order created"
            );
            return Err(ShipmentError::PaymentNotConfirmed);
        }

        self.manager.create_order(
            &checkout_id,
            request.listing,
            request.destination,
            request.payment_method,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipments::label::StubLabelService;
    use crate::shipments::storage::{OrderStore, ViewerRole};
    use shared::OrderStatus;
    use shared::order::types::{CarrierType, SellerInfo};
    use std::time::Duration;

    fn test_bridge(payments: Arc<dyn PaymentProcessor>) -> CheckoutBridge {
        let store = OrderStore::open_in_memory().unwrap();
        let manager = Arc::new(ShipmentManager::new(
            store,
            Arc::new(StubLabelService),
            Duration::from_millis(200),
        ));
        CheckoutBridge::new(manager, payments)
    }

    fn test_request(checkout_id: Option<&str>) -> CheckoutRequest {
        CheckoutRequest {
            checkout_id: checkout_id.map(str::to_string),
            listing: ListingSnapshot {
                listing_id: "3".to_string(),
                title: "Gedore galvučių rinkinys (1/2\")".to_string(),
                price: 45.0,
                image_url: "https://example.test/rinkinys.jpg".to_string(),
                seller: SellerInfo {
                    name: "Garažo Valymas".to_string(),
                    rating: 4.2,
                    review_count: 8,
                },
            },
            destination: Locker {
                id: "O1".to_string(),
                name: "Test Locker".to_string(),
                address: "Taikos pr. 141".to_string(),
                city: "Kaunas".to_string(),
                carrier: CarrierType::Omniva,
            },
            payment_method: PaymentMethod::Card,
            amount: 45.0,
        }
    }

    #[tokio::test]
    async fn test_successful_checkout_creates_order() {
        let bridge = test_bridge(Arc::new(StubPaymentProcessor::approving()));

        let order = bridge
            .complete_checkout(test_request(Some("chk-1")))
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::AwaitingRegistration);
        assert_eq!(order.tracking_history.len(), 1);
        let first = order.last_event().unwrap();
        assert_eq!(first.status, OrderStatus::AwaitingRegistration);
        assert_eq!(first.location, "Garažo Mazgas");
        assert_eq!(order.destination.name, "Test Locker");
        assert_eq!(order.destination.city, "Kaunas");
        assert_eq!(order.payment_method, PaymentMethod::Card);
    }

    #[tokio::test]
    async fn test_declined_payment_creates_no_order() {
        let bridge = test_bridge(Arc::new(StubPaymentProcessor::declining()));

        let result = bridge.complete_checkout(test_request(Some("chk-1"))).await;
        assert!(matches!(result, Err(ShipmentError::PaymentNotConfirmed)));

        let orders = bridge.manager.list_for_viewer(ViewerRole::Buyer).unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_is_idempotent_per_id() {
        let bridge = test_bridge(Arc::new(StubPaymentProcessor::approving()));

        let first = bridge
            .complete_checkout(test_request(Some("chk-1")))
            .await
            .unwrap();
        let replay = bridge
            .complete_checkout(test_request(Some("chk-1")))
            .await
            .unwrap();

        assert_eq!(first.id, replay.id);
        assert_eq!(
            bridge.manager.list_for_viewer(ViewerRole::Buyer).unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_distinct_checkouts_create_distinct_orders() {
        let bridge = test_bridge(Arc::new(StubPaymentProcessor::approving()));

        let a = bridge
            .complete_checkout(test_request(Some("chk-1")))
            .await
            .unwrap();
        let b = bridge
            .complete_checkout(test_request(Some("chk-2")))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.dropoff_code, b.dropoff_code);
    }

    #[tokio::test]
    async fn test_missing_checkout_id_gets_generated() {
        let bridge = test_bridge(Arc::new(StubPaymentProcessor::approving()));

        let a = bridge.complete_checkout(test_request(None)).await.unwrap();
        let b = bridge.complete_checkout(test_request(None)).await.unwrap();

        // Without a client key there is no replay to detect
        assert_ne!(a.id, b.id);
    }
}
