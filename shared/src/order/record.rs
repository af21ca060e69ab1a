//! Order record - a purchased listing moving through fulfillment

use serde::{Deserialize, Serialize};

use super::event::TrackingEvent;
use super::status::OrderStatus;
use super::types::{ListingSnapshot, Locker, ParcelSize, PaymentMethod};

/// Carrier-issued shipping artifacts.
///
/// Tracking number and label are produced together by one registration call;
/// holding them in a single optional struct makes "both absent or both
/// present" impossible to violate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingLabel {
    /// Carrier-assigned tracking number (e.g. "DPD12345678LT")
    pub tracking_number: String,
    /// Printable label artifact reference
    pub label_url: String,
}

/// A purchased listing being tracked through fulfillment.
///
/// Mutated only through the shipment manager; `destination` and
/// `dropoff_code` never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Opaque unique id, assigned at creation
    pub id: String,
    /// Immutable copy of the listing taken at purchase time
    pub listing: ListingSnapshot,
    /// Current lifecycle status; always equals the status of the last
    /// tracking event
    pub status: OrderStatus,
    /// Destination drop-off point, fixed at checkout
    pub destination: Locker,
    /// Compartment size, set when the seller registers the shipment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_size: Option<ParcelSize>,
    /// Carrier artifacts, present from the moment label generation succeeds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<ShippingLabel>,
    /// Code the seller keys in at the locker terminal
    pub dropoff_code: String,
    /// Payment channel used at checkout
    pub payment_method: PaymentMethod,
    /// Append-only audit trail; never reordered or mutated in place
    pub tracking_history: Vec<TrackingEvent>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
    /// Last mutation timestamp
    pub updated_at: i64,
}

impl Order {
    /// Create a freshly confirmed order in `AwaitingRegistration`, with the
    /// "order confirmed" event already appended.
    pub fn confirmed(
        id: String,
        listing: ListingSnapshot,
        destination: Locker,
        payment_method: PaymentMethod,
        dropoff_code: String,
        now: i64,
    ) -> Self {
        let first = TrackingEvent::announce(OrderStatus::AwaitingRegistration, &destination, now);
        Self {
            id,
            listing,
            status: OrderStatus::AwaitingRegistration,
            destination,
            parcel_size: None,
            label: None,
            dropoff_code,
            payment_method,
            tracking_history: vec![first],
            created_at: now,
            updated_at: now,
        }
    }

    /// Last appended tracking event.
    ///
    /// Histories are never empty once an order exists, but readers should
    /// not have to rely on that.
    pub fn last_event(&self) -> Option<&TrackingEvent> {
        self.tracking_history.last()
    }

    /// Whether the carrier label has been generated
    pub fn is_registered(&self) -> bool {
        self.label.is_some()
    }

    /// Tracking number, if registration has happened
    pub fn tracking_number(&self) -> Option<&str> {
        self.label.as_ref().map(|l| l.tracking_number.as_str())
    }
}
