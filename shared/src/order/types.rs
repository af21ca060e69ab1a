//! Shared types for the fulfillment domain

use serde::{Deserialize, Serialize};

// ============================================================================
// Carrier
// ============================================================================

/// Parcel carrier operating a locker network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarrierType {
    Omniva,
    Dpd,
    LpExpress,
}

impl CarrierType {
    /// Brand name as printed on labels and tracking lines
    pub fn brand_name(self) -> &'static str {
        match self {
            CarrierType::Omniva => "Omniva",
            CarrierType::Dpd => "DPD",
            CarrierType::LpExpress => "LP Express",
        }
    }
}

impl std::fmt::Display for CarrierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.brand_name())
    }
}

// ============================================================================
// Parcel Size
// ============================================================================

/// Locker compartment size, chosen by the seller when registering the
/// shipment. Determines which compartment the terminal assigns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ParcelSize {
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
}

impl std::fmt::Display for ParcelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParcelSize::S => "S",
            ParcelSize::M => "M",
            ParcelSize::L => "L",
            ParcelSize::Xl => "XL",
        };
        write!(f, "{s}")
    }
}

// ============================================================================
// Payment
// ============================================================================

/// Payment channel used at checkout (informational only; capture happens in
/// the external processor)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Wallet,
    BankTransfer,
}

// ============================================================================
// Locker
// ============================================================================

/// A physical parcel drop-off point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Locker {
    /// Directory id (e.g. "D1")
    pub id: String,
    /// Locker name as shown on the terminal
    pub name: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Operating carrier
    pub carrier: CarrierType,
}

// ============================================================================
// Listing Snapshot
// ============================================================================

/// Seller identity captured with the listing snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerInfo {
    pub name: String,
    pub rating: f64,
    pub review_count: u32,
}

/// Immutable copy of the purchased listing, taken at purchase time.
///
/// The live listing may later be edited or deleted; the order must never
/// depend on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingSnapshot {
    /// Id of the listing this snapshot was taken from
    pub listing_id: String,
    pub title: String,
    /// Price at purchase time, EUR
    pub price: f64,
    pub image_url: String,
    pub seller: SellerInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_brand_names() {
        assert_eq!(CarrierType::Omniva.to_string(), "Omniva");
        assert_eq!(CarrierType::Dpd.to_string(), "DPD");
        assert_eq!(CarrierType::LpExpress.to_string(), "LP Express");
    }

    #[test]
    fn test_parcel_size_serde_round_trip() {
        assert_eq!(serde_json::to_string(&ParcelSize::Xl).unwrap(), "\"XL\"");
        let m: ParcelSize = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(m, ParcelSize::M);
    }

    #[test]
    fn test_unknown_parcel_size_is_rejected() {
        // The enumeration is closed; anything else fails before reaching
        // the carrier API
        assert!(serde_json::from_str::<ParcelSize>("\"XXL\"").is_err());
    }
}
