//! # Booking Ledger
//!
//! The ordered collection of bookings.
//!
//! ## Identifier Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Booking ids are millisecond timestamps supplied by the caller:        │
//! │                                                                         │
//! │    now_ms = 1758700000000, highest id = 1758699999000  → 1758700000000 │
//! │    now_ms = 1758700000000, highest id = 1758700000000  → 1758700000001 │
//! │    now_ms = 5 (clock went back), highest id = 900      → 901           │
//! │                                                                         │
//! │  id = max(now_ms, highest_id + 1), so ids stay unique and increasing   │
//! │  even for several bookings created within the same millisecond.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Overlapping bookings for the same item are allowed here; callers that
//! want to warn about them use [`crate::availability::overlapping`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability;
use crate::error::CoreResult;
use crate::types::{Booking, NewBooking};
use crate::validation::validate_new_booking;

/// Bookings in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new(bookings: Vec<Booking>) -> Self {
        BookingLedger { bookings }
    }

    /// All bookings, insertion order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Bookings for one item, insertion order.
    pub fn for_item(&self, item_id: &str) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.item_id == item_id).collect()
    }

    pub fn count_for_item(&self, item_id: &str) -> usize {
        self.bookings.iter().filter(|b| b.item_id == item_id).count()
    }

    /// First booking of `item_id` whose range contains `date`.
    pub fn find_covering(&self, item_id: &str, date: NaiveDate) -> Option<&Booking> {
        availability::find_covering(&self.bookings, item_id, date)
    }

    /// The id the next booking created at `now_ms` would receive.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        match self.bookings.iter().map(|b| b.id).max() {
            Some(highest) => now_ms.max(highest.saturating_add(1)),
            None => now_ms,
        }
    }

    /// Appends a booking.
    ///
    /// Does not check that the item exists; that needs the catalog and is
    /// done by the store before calling this.
    pub fn add(&mut self, new_booking: NewBooking, now_ms: i64) -> CoreResult<Booking> {
        validate_new_booking(&new_booking)?;

        let booking = Booking {
            id: self.next_id(now_ms),
            item_id: new_booking.item_id,
            customer_name: new_booking.customer_name.trim().to_string(),
            customer_contact: new_booking.customer_contact.trim().to_string(),
            start_date: new_booking.start_date,
            end_date: new_booking.end_date,
        };

        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Removes the booking with `id`. Returns `None` (and changes nothing)
    /// when there is no such booking.
    pub fn remove(&mut self, id: i64) -> Option<Booking> {
        let index = self.bookings.iter().position(|b| b.id == id)?;
        Some(self.bookings.remove(index))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
