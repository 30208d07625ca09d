//! # Availability
//!
//! Derives which calendar dates are booked for an item.
//!
//! A date `D` is booked for an item when some booking `b` of that item has
//! `b.start_date <= D <= b.end_date`. Everything here is derived on demand
//! from the booking slice; nothing is cached.
//!
//! ## Availability Strip
//! ```text
//! window(bookings, "royal-velvet-choli", 2025-09-22, 7)
//!
//!   22   23   24   25   26   27   28
//!   ○    ○    ●    ●    ●    ○    ○        ● = booked (carries booking id)
//! ```

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::types::Booking;

/// One day of an availability strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: NaiveDate,
    /// The first booking covering this day, if any.
    pub booking_id: Option<i64>,
}

impl DayStatus {
    #[inline]
    pub fn is_booked(&self) -> bool {
        self.booking_id.is_some()
    }
}

/// Whether `date` is booked for `item_id`.
pub fn is_booked(bookings: &[Booking], item_id: &str, date: NaiveDate) -> bool {
    find_covering(bookings, item_id, date).is_some()
}

/// First booking of `item_id` (insertion order) whose range contains `date`.
///
/// Overlapping bookings are possible; the earliest-created one wins.
pub fn find_covering<'a>(
    bookings: &'a [Booking],
    item_id: &str,
    date: NaiveDate,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .find(|b| b.item_id == item_id && b.covers(date))
}

/// Every booked date of `item_id`, ascending.
pub fn booked_dates(bookings: &[Booking], item_id: &str) -> BTreeSet<NaiveDate> {
    bookings
        .iter()
        .filter(|b| b.item_id == item_id)
        .flat_map(|b| b.start_date.iter_days().take_while(move |d| *d <= b.end_date))
        .collect()
}

/// Per-day status for `days` consecutive days starting at `from`.
pub fn window(bookings: &[Booking], item_id: &str, from: NaiveDate, days: u32) -> Vec<DayStatus> {
    (0..u64::from(days))
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .map(|date| DayStatus {
            date,
            booking_id: find_covering(bookings, item_id, date).map(|b| b.id),
        })
        .collect()
}

/// Existing bookings of `item_id` that share a day with `start ..= end`.
pub fn overlapping<'a>(
    bookings: &'a [Booking],
    item_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.item_id == item_id && b.overlaps(start, end))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
