//! Tracking events - immutable facts in a shipment's audit trail

use serde::{Deserialize, Serialize};

use super::status::OrderStatus;
use super::types::{CarrierType, Locker};

/// One immutable entry in an order's tracking history.
///
/// Histories are append-only; insertion order is chronological order and
/// timestamps never decrease within one order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingEvent {
    /// Status this event announces
    pub status: OrderStatus,
    /// Free-text description of where the event occurred
    pub location: String,
    /// Event time (Unix milliseconds)
    pub timestamp: i64,
    /// Human-readable explanation, derived from `(status, carrier)`
    pub description: String,
}

impl TrackingEvent {
    /// Build the event announcing `status`, with location and description
    /// derived from the destination locker.
    pub fn announce(status: OrderStatus, destination: &Locker, timestamp: i64) -> Self {
        Self {
            status,
            location: event_location(status, destination),
            timestamp,
            description: status_description(status, destination.carrier),
        }
    }
}

/// Tracking line text for a status.
///
/// Derived deterministically from `(status, carrier)` so it can be
/// regenerated or localized later without touching stored history.
pub fn status_description(status: OrderStatus, carrier: CarrierType) -> String {
    match status {
        OrderStatus::AwaitingRegistration => {
            "Pirkėjas apmokėjo. Pardavėjas turi paruošti siuntą.".to_string()
        }
        OrderStatus::LabelReady => {
            format!("{carrier} manifestas sugeneruotas. Ruoškite siuntą.")
        }
        OrderStatus::InTransit => {
            format!("Siunta paimta iš terminalo ir juda {carrier} tinklu.")
        }
        OrderStatus::ReadyForPickup => {
            format!("Siunta pristatyta į pasirinktą {carrier} tašką.")
        }
        OrderStatus::Delivered => {
            "Siunta sėkmingai atsiimta. Pinigai pervedami pardavėjui.".to_string()
        }
    }
}

/// Where a status event is reported from
pub fn event_location(status: OrderStatus, destination: &Locker) -> String {
    match status {
        OrderStatus::AwaitingRegistration => "Garažo Mazgas".to_string(),
        OrderStatus::LabelReady | OrderStatus::InTransit => {
            format!("{} Centras", destination.carrier)
        }
        OrderStatus::ReadyForPickup | OrderStatus::Delivered => destination.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_locker() -> Locker {
        Locker {
            id: "O1".to_string(),
            name: "Omniva - MAXIMA XX".to_string(),
            address: "Taikos pr. 141".to_string(),
            city: "Kaunas".to_string(),
            carrier: CarrierType::Omniva,
        }
    }

    #[test]
    fn test_description_is_deterministic() {
        let a = status_description(OrderStatus::InTransit, CarrierType::Dpd);
        let b = status_description(OrderStatus::InTransit, CarrierType::Dpd);
        assert_eq!(a, b);
        assert_eq!(a, "Siunta paimta iš terminalo ir juda DPD tinklu.");
    }

    #[test]
    fn test_description_varies_by_carrier() {
        let dpd = status_description(OrderStatus::LabelReady, CarrierType::Dpd);
        let omniva = status_description(OrderStatus::LabelReady, CarrierType::Omniva);
        assert_ne!(dpd, omniva);
        assert!(omniva.starts_with("Omniva"));
    }

    #[test]
    fn test_announce_derives_all_fields() {
        let locker = test_locker();
        let event = TrackingEvent::announce(OrderStatus::ReadyForPickup, &locker, 1_700_000_000_000);
        assert_eq!(event.status, OrderStatus::ReadyForPickup);
        assert_eq!(event.location, "Omniva - MAXIMA XX");
        assert_eq!(event.timestamp, 1_700_000_000_000);
        assert!(event.description.contains("Omniva"));
    }

    #[test]
    fn test_confirmation_event_location_is_marketplace() {
        let locker = test_locker();
        let event = TrackingEvent::announce(OrderStatus::AwaitingRegistration, &locker, 1);
        assert_eq!(event.location, "Garažo Mazgas");
        assert_eq!(
            event.description,
            "Pirkėjas apmokėjo. Pardavėjas turi paruošti siuntą."
        );
    }
}
