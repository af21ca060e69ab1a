//! Local checkout example - drive one order through the whole lifecycle
//!
//! Shows how to use the fulfillment engine in-process, without the HTTP
//! surface:
//! 1. Initialize ServerState (store, manager, bridge, locker directory)
//! 2. Pick a locker, complete a checkout
//! 3. Register the parcel, then walk the order to Delivered
//!
//! Run: cargo run -p fulfillment-server --example local_checkout

use fulfillment_server::shipments::CheckoutRequest;
use fulfillment_server::{Config, ServerState};
use shared::order::types::{ListingSnapshot, PaymentMethod, SellerInfo};
use shared::ParcelSize;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Local Checkout Example ===\n");

    // === 1. Initialize ServerState ===
    println!("1. Initializing ServerState...");

    let temp_dir = std::env::temp_dir().join("fulfillment-local-example");
    std::fs::create_dir_all(&temp_dir)?;

    let mut config = Config::from_env();
    config.work_dir = temp_dir.to_string_lossy().into_owned();
    let state = ServerState::initialize(&config)?;
    println!("   ServerState initialized.\n");

    // === 2. Pick a destination locker ===
    println!("2. Searching the locker directory for \"Kaunas\"...");
    let lockers = state.lockers.search("Kaunas");
    for locker in &lockers {
        println!("   [{}] {} ({})", locker.id, locker.name, locker.carrier);
    }
    let destination = lockers.first().expect("catalog has Kaunas lockers").clone();
    println!("   Chosen: {}\n", destination.name);

    // === 3. Checkout ===
    println!("3. Completing checkout...");
    let order = state
        .bridge
        .complete_checkout(CheckoutRequest {
            checkout_id: None,
            listing: ListingSnapshot {
                listing_id: "42".to_string(),
                title: "BMW E46 M3 Vairas".to_string(),
                price: 350.0,
                image_url: "https://example.test/vairas.jpg".to_string(),
                seller: SellerInfo {
                    name: "Tomas V.".to_string(),
                    rating: 4.8,
                    review_count: 12,
                },
            },
            destination,
            payment_method: PaymentMethod::Card,
            amount: 350.0,
        })
        .await?;
    println!("   Order {} created, dropoff code {}\n", order.id, order.dropoff_code);

    // === 4. Seller registers the parcel ===
    println!("4. Registering shipment (parcel size M)...");
    let registered = state.manager.register_shipment(&order.id, ParcelSize::M).await?;
    println!(
        "   Tracking number: {}\n",
        registered.tracking_number().unwrap_or("-")
    );

    // === 5. Walk the order to Delivered ===
    println!("5. Advancing through the carrier network...");
    state.manager.mark_shipped(&order.id)?;
    state.manager.mark_ready_for_pickup(&order.id)?;
    let delivered = state.manager.confirm_delivery(&order.id)?;

    println!("   Final status: {}\n", delivered.status.display_name());
    println!("   Tracking history:");
    for event in &delivered.tracking_history {
        println!("   - [{}] {}: {}", event.timestamp, event.location, event.description);
    }

    Ok(())
}
