//! Shipment Lifecycle Module
//!
//! This module drives an order through its shipping states:
//!
//! - **manager**: validates transitions, calls the label generator, and is
//!   the single writer of persisted order records
//! - **storage**: redb-backed order store (orders, open-order index,
//!   processed-checkout index, order counter)
//! - **checkout**: translates a completed payment + chosen locker into the
//!   initial order state
//! - **label**: external label/manifest generator contract and clients
//!
//! # Data Flow
//!
//! ```text
//! Checkout → CheckoutBridge → ShipmentManager → OrderStore (redb)
//!                                   ↓
//!                          TrackingEvent append
//!                                   ↓
//!                          Broadcast to subscribers
//! ```
//!
//! Every transition appends exactly one `TrackingEvent` and updates the
//! denormalized status in the same committed write, so the status field and
//! the history tail can never disagree.

pub mod checkout;
pub mod error;
pub mod label;
pub mod manager;
pub mod storage;

// Re-exports
pub use checkout::{CheckoutBridge, CheckoutRequest, PaymentProcessor, StubPaymentProcessor};
pub use error::{ShipmentError, ShipmentResult};
pub use label::{CarrierApiClient, LabelError, LabelGenerator, StubLabelService};
pub use manager::{OrderUpdate, ShipmentManager};
pub use storage::{OrderStore, StorageError, StoreStats, TransitionUpdates, ViewerRole};
