//! # Seed Dataset Writer
//!
//! Resets a Rental Desk database to the seed catalog and bookings.
//!
//! ## Usage
//! ```bash
//! # Reset ./rental_dev.db (default)
//! cargo run -p rental-db --bin seed
//!
//! # Specify database path
//! cargo run -p rental-db --bin seed -- --db ./data/rental.db
//!
//! # Only seed when the slots are empty
//! cargo run -p rental-db --bin seed -- --if-empty
//! ```

use std::env;

use rental_core::{BOOKINGS_SLOT, ITEMS_SLOT};
use rental_db::{Database, DbConfig, RentalStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./rental_dev.db");
    let mut if_empty = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--if-empty" => if_empty = true,
            "--help" | "-h" => {
                println!("Rental Desk Seed Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./rental_dev.db)");
                println!("      --if-empty     Leave existing data alone");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Rental Desk Seed Writer");
    println!("==========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.slots().keys().await?;
    let has_data = existing.iter().any(|k| k == ITEMS_SLOT || k == BOOKINGS_SLOT);

    if if_empty && has_data {
        println!("⚠ Database already has stored collections: {}", existing.join(", "));
        println!("  Skipping seed.");
        return Ok(());
    }

    // Opening seeds any missing slot; reset overwrites the rest.
    let mut store = RentalStore::open(&db).await?;
    store.reset_to_seed().await?;

    println!();
    println!("✓ Wrote {} items", store.items().len());
    println!("✓ Wrote {} bookings", store.bookings().len());

    db.close().await;
    Ok(())
}
