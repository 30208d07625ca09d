//! # Seed Dataset
//!
//! The fixed default items and bookings substituted whenever a storage slot
//! is missing or unreadable, and written by the `seed` binary.

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{Booking, Item};

fn item(id: &str, name: &str, price: u32, image_seed: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        price_per_day: Money::new(price),
        image_url: format!("https://picsum.photos/seed/{}/720/1280", image_seed),
    }
}

/// Seed catalog, in display order.
pub fn items() -> Vec<Item> {
    vec![
        item("peacock-dream-lehenga", "Peacock Dream Lehenga", 3500, "choli1"),
        item("royal-velvet-choli", "Royal Velvet Choli", 5000, "choli2"),
        item("sunshine-bandhani", "Sunshine Bandhani", 2500, "choli3"),
        item("pastel-floral-glory", "Pastel Floral Glory", 4000, "choli4"),
    ]
}

/// Seed bookings.
pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 1,
            item_id: "royal-velvet-choli".to_string(),
            customer_name: "Priya Patel".to_string(),
            customer_contact: "9876543210".to_string(),
            start_date: ymd(2025, 9, 24),
            end_date: ymd(2025, 9, 26),
        },
        Booking {
            id: 2,
            item_id: "sunshine-bandhani".to_string(),
            customer_name: "Anjali Sharma".to_string(),
            customer_contact: "8765432109".to_string(),
            start_date: ymd(2025, 9, 27),
            end_date: ymd(2025, 9, 30),
        },
    ]
}

// Constant dates, always valid.
fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
