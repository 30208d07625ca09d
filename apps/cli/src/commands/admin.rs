//! # Admin Commands
//!
//! Catalog maintenance and the booking overview.
//!
//! Deletions are two-phase: the store's check runs first so a blocked
//! deletion fails without asking, then the user confirms, then the store
//! mutates and persists.

use tracing::warn;

use crate::commands::catalog::plural;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::prompt::Confirm;
use rental_core::NewItem;
use rental_db::RentalStore;

/// `admin add-item`
pub async fn add_item(
    store: &mut RentalStore,
    config: &AppConfig,
    name: String,
    price: f64,
    image: String,
) -> AppResult<String> {
    let item = store.add_item(NewItem::new(name, price, image)).await?;

    Ok(format!(
        "Added {} [{}] at {}/day.\n",
        item.name,
        item.id,
        config.format_money(item.price_per_day)
    ))
}

/// `admin delete-item`
pub async fn delete_item(
    store: &mut RentalStore,
    item_id: &str,
    confirm: &mut dyn Confirm,
) -> AppResult<String> {
    let name = store
        .item(item_id)
        .map(|item| item.name.clone())
        .ok_or_else(|| AppError::not_found("Item", item_id))?;

    store.ensure_item_removable(item_id)?;

    if !confirm.confirm(&format!("Delete {} [{}]?", name, item_id)) {
        return Ok("Cancelled. Nothing was changed.\n".to_string());
    }

    let removed = store.remove_item(item_id).await?;
    Ok(format!("Deleted {} [{}].\n", removed.name, removed.id))
}

/// `admin delete-booking`. An unknown id changes nothing.
pub async fn delete_booking(
    store: &mut RentalStore,
    booking_id: i64,
    confirm: &mut dyn Confirm,
) -> AppResult<String> {
    let Some(booking) = store.ledger().get(booking_id) else {
        warn!(booking_id, "Delete requested for unknown booking");
        return Ok(format!("No booking #{}. Nothing was changed.\n", booking_id));
    };

    let question = format!(
        "Delete booking #{} for {} ({} to {})?",
        booking.id, booking.customer_name, booking.start_date, booking.end_date
    );
    if !confirm.confirm(&question) {
        return Ok("Cancelled. Nothing was changed.\n".to_string());
    }

    match store.remove_booking(booking_id).await? {
        Some(removed) => Ok(format!(
            "Deleted booking #{} for {}.\n",
            removed.id, removed.customer_name
        )),
        None => Ok(format!("No booking #{}. Nothing was changed.\n", booking_id)),
    }
}

/// `admin bookings`: every booking with its item and total.
pub fn list_bookings(store: &RentalStore, config: &AppConfig) -> String {
    let bookings = store.bookings();
    if bookings.is_empty() {
        return "No bookings.\n".to_string();
    }

    let mut out = format!("{}\n", plural(bookings.len(), "booking"));
    for booking in bookings {
        let (item_label, total) = match store.item(&booking.item_id) {
            Some(item) => (
                item.name.clone(),
                config.format_money(booking.quote(item.price_per_day)),
            ),
            None => (format!("{} (deleted item)", booking.item_id), "-".to_string()),
        };

        out.push_str(&format!(
            "  #{}  {}  {} ({})  {} to {}  {}\n",
            booking.id,
            item_label,
            booking.customer_name,
            booking.customer_contact,
            booking.start_date,
            booking.end_date,
            total
        ));
    }

    let orphans = store.orphaned_bookings().len();
    if orphans > 0 {
        out.push_str(&format!(
            "\n{} reference{} an item that no longer exists.\n",
            plural(orphans, "booking"),
            if orphans == 1 { "s" } else { "" }
        ));
    }

    out
}
