//! # Catalog Commands
//!
//! The list view: every item in insertion order with its daily price,
//! booking count and an availability strip.
//!
//! ## Strip Layout
//! ```text
//! Royal Velvet Choli  [royal-velvet-choli]
//!   ₹5,000/day · 1 booking
//!     Sep 22 - Sep 28
//!     22 23 24 25 26 27 28
//!      ·  ·  ■  ■  ■  ·  ·
//! ```

use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use rental_core::availability::{self, DayStatus};
use rental_core::Money;
use rental_db::RentalStore;

const FREE: &str = "·";
const BOOKED: &str = "■";

/// List-view DTO. Also the `--json` output shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummaryDto {
    pub id: String,
    pub name: String,
    pub price_per_day: Money,
    pub image_url: String,
    pub booking_count: usize,
    pub availability: Vec<DayStatus>,
}

/// Builds the list view for `days` days starting at `from`.
pub fn list_items(store: &RentalStore, from: chrono::NaiveDate, days: u32) -> Vec<ItemSummaryDto> {
    let bookings = store.bookings();

    store
        .items()
        .iter()
        .map(|item| ItemSummaryDto {
            id: item.id.clone(),
            name: item.name.clone(),
            price_per_day: item.price_per_day,
            image_url: item.image_url.clone(),
            booking_count: store.ledger().count_for_item(&item.id),
            availability: availability::window(bookings, &item.id, from, days),
        })
        .collect()
}

pub fn render_list(items: &[ItemSummaryDto], config: &AppConfig) -> String {
    if items.is_empty() {
        return "No items in the catalog. Add one with `rental-desk admin add-item`.\n".to_string();
    }

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}  [{}]\n", item.name, item.id));
        out.push_str(&format!(
            "  {}/day · {}\n",
            config.format_money(item.price_per_day),
            plural(item.booking_count, "booking")
        ));
        out.push_str(&render_strip(&item.availability, "    "));
    }
    out
}

pub fn render_json(items: &[ItemSummaryDto]) -> AppResult<String> {
    serde_json::to_string_pretty(items)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| AppError::internal(format!("Could not encode JSON: {}", e)))
}

/// Renders a strip as a range header, day numbers and booked marks.
pub fn render_strip(days: &[DayStatus], indent: &str) -> String {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return String::new();
    };

    let numbers: String = days.iter().map(|d| format!("{:>3}", d.date.format("%d"))).collect();
    let marks: String = days
        .iter()
        .map(|d| format!("{:>3}", if d.is_booked() { BOOKED } else { FREE }))
        .collect();

    format!(
        "{indent}{} - {}\n{indent}{}\n{indent}{}\n",
        first.date.format("%b %d"),
        last.date.format("%b %d"),
        numbers.trim_start(),
        // keep marks aligned under the trimmed numbers
        &marks[1..],
        indent = indent
    )
}

pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
