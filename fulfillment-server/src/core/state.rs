use std::sync::Arc;

use crate::core::Config;
use crate::lockers::LockerDirectory;
use crate::shipments::{
    CarrierApiClient, CheckoutBridge, LabelGenerator, OrderStore, ShipmentManager,
    StubPaymentProcessor,
};
use std::time::Duration;

/// Server state - shared handles to every service
///
/// Cheap to clone; all services sit behind `Arc`.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Shipment lifecycle manager (single writer of order records)
    pub manager: Arc<ShipmentManager>,
    /// Checkout→order bridge
    pub bridge: Arc<CheckoutBridge>,
    /// Locker directory
    pub lockers: Arc<LockerDirectory>,
}

impl ServerState {
    /// Open the store and wire up all services.
    ///
    /// Picks the real carrier client when credentials are configured,
    /// otherwise the offline stub so development works end to end.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let store = OrderStore::open(config.db_path())?;

        let labels: Arc<dyn LabelGenerator> =
            match (&config.carrier_api_user, &config.carrier_api_pass) {
                (Some(user), Some(pass)) => {
                    tracing::info!(url = %config.carrier_api_url, "Using carrier shipment API");
                    Arc::new(CarrierApiClient::new(
                        config.carrier_api_url.clone(),
                        user.clone(),
                        pass.clone(),
                    ))
                }
                _ => {
                    tracing::warn!(
                        "Carrier credentials not configured, using offline label stub"
                    );
                    Arc::new(crate::shipments::StubLabelService)
                }
            };

        let manager = Arc::new(ShipmentManager::new(
            store,
            labels,
            Duration::from_millis(config.label_timeout_ms),
        ));

        // Payment capture is an external service; the stub mirrors its
        // boolean contract and always approves in local setups
        let bridge = Arc::new(CheckoutBridge::new(
            manager.clone(),
            Arc::new(StubPaymentProcessor::approving()),
        ));

        Ok(Self {
            config: config.clone(),
            manager,
            bridge,
            lockers: Arc::new(LockerDirectory::with_default_catalog()),
        })
    }
}
