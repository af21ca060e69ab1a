//! Garažo Mazgas Fulfillment Server
//!
//! Backend for the secondhand auto parts marketplace: drives purchased
//! orders through the shipment lifecycle and exposes a thin HTTP surface
//! for the buyer and seller views.
//!
//! # Module structure
//!
//! ```text
//! fulfillment-server/src/
//! ├── core/       # Config, state, HTTP server
//! ├── shipments/  # Lifecycle manager, order store, checkout bridge, labels
//! ├── lockers/    # Drop-off point directory
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod lockers;
pub mod shipments;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use shipments::{CheckoutBridge, OrderStore, ShipmentError, ShipmentManager};
pub use utils::{AppError, AppResult};

/// Load .env and initialize logging. Call once at startup.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let config = Config::from_env();
    if config.is_production() {
        std::fs::create_dir_all(config.log_dir())?;
        utils::init_logger_with_file(&level, true, config.log_dir().to_str())?;
    } else {
        utils::init_logger(&level)?;
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______                  _
  / ____/___ __________ _ (_)___
 / / __/ __ `/ ___/ __ `// /_  /
/ /_/ / /_/ / /  / /_/ // / / /_
\____/\__,_/_/   \__,_// / /___/
                     /___/
    __  ___
   /  |/  /___ _____  ____ _____ ______
  / /|_/ / __ `/_  / / __ `/ __ `/ ___/
 / /  / / /_/ / / /_/ /_/ / /_/ (__  )
/_/  /_/\__,_/ /___/\__, /\__,_/____/
                   /____/
    "#
    );
}
