//! Label/manifest generation - the external carrier contract
//!
//! Registering a shipment is the only slow operation in the lifecycle: it
//! goes over the network and may fail or hang. The manager bounds every call
//! with a timeout and treats any failure as retryable; the order stays in
//! `AwaitingRegistration` and the seller re-invokes the operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{ParcelSize, ShippingLabel};
use thiserror::Error;

/// Errors from the carrier label service
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Carrier rejected the shipment: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// External label/manifest generator.
///
/// One successful call produces the tracking number and the printable label
/// together; no partial result is ever returned.
#[async_trait]
pub trait LabelGenerator: Send + Sync {
    async fn register_shipment(
        &self,
        order_id: &str,
        size: ParcelSize,
    ) -> Result<ShippingLabel, LabelError>;
}

// ============================================================================
// Carrier HTTP client
// ============================================================================

#[derive(Debug, Serialize)]
struct ShipmentRequest<'a> {
    reference: &'a str,
    parcel_size: String,
}

#[derive(Debug, Deserialize)]
struct ShipmentResponse {
    tracking_number: String,
    label_url: String,
}

/// HTTP client for the carrier shipment API
///
/// Authenticates with the account credentials from configuration and posts
/// one shipment registration per call.
pub struct CarrierApiClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl CarrierApiClient {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl LabelGenerator for CarrierApiClient {
    async fn register_shipment(
        &self,
        order_id: &str,
        size: ParcelSize,
    ) -> Result<ShippingLabel, LabelError> {
        let url = format!("{}/shipments", self.base_url);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&ShipmentRequest {
                reference: order_id,
                parcel_size: size.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LabelError::Rejected(format!("HTTP {status}: {body}")));
        }

        let body: ShipmentResponse = response.json().await?;
        tracing::debug!(
            order_id,
            tracking_number = %body.tracking_number,
            "Carrier accepted shipment"
        );
        Ok(ShippingLabel {
            tracking_number: body.tracking_number,
            label_url: body.label_url,
        })
    }
}

// ============================================================================
// Offline stub
// ============================================================================

/// Offline label service used when no carrier credentials are configured.
///
/// Mirrors the live response shape: a DPD-format tracking number and a QR
/// image as the printable label.
pub struct StubLabelService;

#[async_trait]
impl LabelGenerator for StubLabelService {
    async fn register_shipment(
        &self,
        order_id: &str,
        size: ParcelSize,
    ) -> Result<ShippingLabel, LabelError> {
        use rand::Rng;
        let number: u32 = rand::thread_rng().gen_range(10_000_000..100_000_000);
        let tracking_number = format!("DPD{number}LT");
        let label_url = format!(
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data={tracking_number}"
        );
        tracing::debug!(order_id, size = %size, %tracking_number, "Stub label generated");
        Ok(ShippingLabel {
            tracking_number,
            label_url,
        })
    }
}
