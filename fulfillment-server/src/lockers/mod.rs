//! Locker/carrier directory - read-only drop-off point lookup
//!
//! Pure catalog: populated once at startup, filtered by free text. Used
//! only to pick a destination at checkout; never written to afterwards.

use shared::Locker;
use shared::order::types::CarrierType;

/// Directory of physical parcel drop-off points
pub struct LockerDirectory {
    catalog: Vec<Locker>,
}

impl LockerDirectory {
    pub fn new(catalog: Vec<Locker>) -> Self {
        Self { catalog }
    }

    /// Directory with the built-in locker catalog
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    /// Case-insensitive free-text filter over name, address and city.
    /// An empty query returns the full catalog.
    pub fn search(&self, query: &str) -> Vec<Locker> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.catalog.clone();
        }
        self.catalog
            .iter()
            .filter(|l| {
                l.name.to_lowercase().contains(&q)
                    || l.address.to_lowercase().contains(&q)
                    || l.city.to_lowercase().contains(&q)
            })
            .cloned()
            .collect()
    }
}

fn locker(id: &str, name: &str, address: &str, city: &str, carrier: CarrierType) -> Locker {
    Locker {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        carrier,
    }
}

fn default_catalog() -> Vec<Locker> {
    vec![
        locker(
            "D1",
            "DPD paštomatas - IKI Girstupis",
            "Kovo 11-osios g. 22",
            "Kaunas",
            CarrierType::Dpd,
        ),
        locker(
            "D2",
            "DPD paštomatas - PC AKROPOLIS",
            "Karaliaus Mindaugo pr. 49",
            "Kaunas",
            CarrierType::Dpd,
        ),
        locker(
            "D3",
            "DPD paštomatas - MAXIMA XXX",
            "Mindaugo g. 11",
            "Vilnius",
            CarrierType::Dpd,
        ),
        locker(
            "D4",
            "DPD paštomatas - PC RYO",
            "Savitiškio g. 61",
            "Panevėžys",
            CarrierType::Dpd,
        ),
        locker(
            "O1",
            "Omniva - MAXIMA XX",
            "Taikos pr. 141",
            "Kaunas",
            CarrierType::Omniva,
        ),
        locker(
            "O2",
            "Omniva - RIMI Žirmūnai",
            "Žirmūnų g. 2",
            "Vilnius",
            CarrierType::Omniva,
        ),
        locker(
            "L1",
            "LP Express - Spaudos rūmai",
            "Laisvės pr. 60",
            "Vilnius",
            CarrierType::LpExpress,
        ),
        locker(
            "L2",
            "LP Express - PC Molas",
            "K. Baršausko g. 66A",
            "Kaunas",
            CarrierType::LpExpress,
        ),
    ]
}
