//! # Detail Commands
//!
//! The item detail view, the booking form and date-based unbooking.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    book <ITEM_ID> --start --end                         │
//! │                                                                         │
//! │  1. Look up the item ──────────────────────────► unknown? NOT_FOUND     │
//! │  2. Collect overlapping bookings (allowed, reported as warnings)        │
//! │  3. RentalStore::add_booking ──────────────────► invalid? VALIDATION    │
//! │       • validates customer fields and date order                        │
//! │       • assigns a fresh id, persists the ledger                         │
//! │  4. Print confirmation + quote (price/day × inclusive days)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::cli::BookArgs;
use crate::commands::catalog::{plural, render_strip};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::prompt::Confirm;
use rental_core::availability;
use rental_core::{Booking, Item, NewBooking};
use rental_db::RentalStore;

/// Detail view for one item.
pub fn show_item(
    store: &RentalStore,
    config: &AppConfig,
    item_id: &str,
    from: NaiveDate,
    days: u32,
) -> AppResult<String> {
    let item = store
        .item(item_id)
        .ok_or_else(|| AppError::not_found("Item", item_id))?;

    let mut out = String::new();
    out.push_str(&format!("{}  [{}]\n", item.name, item.id));
    out.push_str(&format!("Price:  {}/day\n", config.format_money(item.price_per_day)));
    out.push_str(&format!("Image:  {}\n", display_image(&item.image_url)));

    out.push_str("\nAvailability\n");
    let strip = availability::window(store.bookings(), &item.id, from, days);
    out.push_str(&render_strip(&strip, "  "));

    let booked = availability::booked_dates(store.bookings(), &item.id);
    out.push_str("\nBooked dates: ");
    if booked.is_empty() {
        out.push_str("none\n");
    } else {
        let dates: Vec<String> = booked.iter().map(|d| d.to_string()).collect();
        out.push_str(&dates.join(", "));
        out.push('\n');
    }

    let bookings = store.bookings_for_item(&item.id);
    out.push_str(&format!("\nBookings ({})\n", bookings.len()));
    for booking in bookings {
        out.push_str(&booking_line(booking, item, config));
    }

    Ok(out)
}

/// Creates a booking from the booking form.
pub async fn book_item(
    store: &mut RentalStore,
    config: &AppConfig,
    args: BookArgs,
) -> AppResult<String> {
    if store.item(&args.item_id).is_none() {
        return Err(AppError::not_found("Item", &args.item_id));
    }

    let overlaps: Vec<Booking> =
        availability::overlapping(store.bookings(), &args.item_id, args.start, args.end)
            .into_iter()
            .cloned()
            .collect();

    let booking = store
        .add_booking(NewBooking {
            item_id: args.item_id,
            customer_name: args.name,
            customer_contact: args.contact,
            start_date: args.start,
            end_date: args.end,
        })
        .await?;

    let item = store
        .item(&booking.item_id)
        .ok_or_else(|| AppError::not_found("Item", &booking.item_id))?;

    let mut out = String::from("Booking successful!\n");
    out.push_str(&booking_line(&booking, item, config));

    for other in &overlaps {
        debug!(booking_id = booking.id, overlaps = other.id, "Overlapping booking created");
        out.push_str(&format!(
            "Warning: overlaps booking #{} for {} ({} to {})\n",
            other.id, other.customer_name, other.start_date, other.end_date
        ));
    }

    Ok(out)
}

/// Removes the booking of `item_id` that covers `date`, after confirmation.
///
/// The item need not be in the catalog, so bookings of a deleted item can
/// still be cleared. A miss changes nothing.
pub async fn unbook(
    store: &mut RentalStore,
    item_id: &str,
    date: NaiveDate,
    confirm: &mut dyn Confirm,
) -> AppResult<String> {
    if let Some(booking) = store.booking_covering(item_id, date) {
        let question = format!(
            "Remove booking #{} for {} ({} to {})?",
            booking.id, booking.customer_name, booking.start_date, booking.end_date
        );
        if !confirm.confirm(&question) {
            return Ok("Cancelled. Nothing was changed.\n".to_string());
        }
    }

    match store.unbook_date(item_id, date).await? {
        Some(removed) => Ok(format!(
            "Removed booking #{} for {} ({} to {}).\n",
            removed.id, removed.customer_name, removed.start_date, removed.end_date
        )),
        None => Ok(format!(
            "No booking of {} covers {}. Nothing was changed.\n",
            item_id, date
        )),
    }
}

/// `  #1  Priya Patel (9876543210)  2025-09-24 to 2025-09-26  3 days  ₹15,000`
fn booking_line(booking: &Booking, item: &Item, config: &AppConfig) -> String {
    format!(
        "  #{}  {} ({})  {} to {}  {}  {}\n",
        booking.id,
        booking.customer_name,
        booking.customer_contact,
        booking.start_date,
        booking.end_date,
        plural(usize::try_from(booking.days()).unwrap_or(0), "day"),
        config.format_money(booking.quote(item.price_per_day))
    )
}

/// Data URIs are shortened to their media type.
fn display_image(image_url: &str) -> String {
    match image_url.strip_prefix("data:") {
        Some(rest) => {
            let media = rest.split([';', ',']).next().unwrap_or("image");
            format!("(embedded {}, {} bytes)", media, image_url.len())
        }
        None => image_url.to_string(),
    }
}
