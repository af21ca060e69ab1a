//! Order Fulfillment Module
//!
//! This module provides the types for the shipment lifecycle:
//! - Status: the closed set of states an order moves through
//! - Events: immutable facts recorded after each transition
//! - Orders: the persisted record both buyer and seller views read from

pub mod event;
pub mod record;
pub mod status;
pub mod types;

// Re-exports
pub use event::{TrackingEvent, event_location, status_description};
pub use record::{Order, ShippingLabel};
pub use status::OrderStatus;
pub use types::{CarrierType, ListingSnapshot, Locker, ParcelSize, PaymentMethod, SellerInfo};
