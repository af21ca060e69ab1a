//! Shipment status - the closed set of lifecycle states

use serde::{Deserialize, Serialize};

/// Shipment lifecycle status
///
/// The lifecycle is linear:
/// `AwaitingRegistration → LabelReady → InTransit → ReadyForPickup → Delivered`
///
/// The denormalized `status` field on an order always mirrors the status of
/// the last appended tracking event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Buyer has paid; seller still has to register the parcel with the carrier
    #[default]
    AwaitingRegistration,
    /// Carrier manifest generated, label ready to print
    LabelReady,
    /// Parcel dropped off and moving through the carrier network
    InTransit,
    /// Parcel waiting in the destination locker
    ReadyForPickup,
    /// Buyer collected the parcel
    Delivered,
}

impl OrderStatus {
    /// Whether `next` is a legal successor of the current status.
    ///
    /// Each state has exactly one successor; `Delivered` has none.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::AwaitingRegistration, OrderStatus::LabelReady)
                | (OrderStatus::LabelReady, OrderStatus::InTransit)
                | (OrderStatus::InTransit, OrderStatus::ReadyForPickup)
                | (OrderStatus::ReadyForPickup, OrderStatus::Delivered)
        )
    }

    /// Terminal statuses accept no further transitions
    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    /// Display label for order lists (UI only, never persisted)
    pub fn display_name(self) -> &'static str {
        match self {
            OrderStatus::AwaitingRegistration => "Laukiama registracijos",
            OrderStatus::LabelReady => "Lipdukas paruoštas",
            OrderStatus::InTransit => "Siunta kelyje",
            OrderStatus::ReadyForPickup => "Paruošta atsiėmimui",
            OrderStatus::Delivered => "Pristatyta",
        }
    }
}
