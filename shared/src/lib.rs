//! Shared domain types for the Garažo Mazgas fulfillment stack
//!
//! This crate holds the types exchanged between the fulfillment server and
//! its clients:
//! - Orders: a purchased listing moving through shipment fulfillment
//! - Tracking events: immutable facts appended to an order's history
//! - Lockers: physical parcel drop-off points operated by a carrier

pub mod order;
pub mod util;

// Re-exports
pub use order::{
    CarrierType, ListingSnapshot, Locker, Order, OrderStatus, ParcelSize, PaymentMethod,
    SellerInfo, ShippingLabel, TrackingEvent,
};
