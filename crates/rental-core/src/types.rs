//! # Domain Types
//!
//! Core domain types used throughout Rental Desk.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌──────────────────────────┐          │
//! │  │       Item          │          │        Booking           │          │
//! │  │  ─────────────────  │   1   *  │  ──────────────────────  │          │
//! │  │  id (name slug)     │◄─────────│  item_id ("choliId")     │          │
//! │  │  name               │          │  id (ms timestamp)       │          │
//! │  │  price_per_day      │          │  customer_name/contact   │          │
//! │  │  image_url          │          │  start_date ..= end_date │          │
//! │  └─────────────────────┘          └──────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Both types serialize with camelCase names and dates as `YYYY-MM-DD`, the
//! exact layout the browser app keeps in local storage. Comparing
//! `NaiveDate`s is equivalent to comparing those ISO strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Identifier Derivation
// =============================================================================

/// Derives an item identifier from its display name.
///
/// Lowercases the name and replaces every run of whitespace with a single
/// hyphen. Nothing else is stripped or normalised.
///
/// ## Example
/// ```rust
/// use rental_core::types::derive_item_id;
///
/// assert_eq!(derive_item_id("Golden Silk Saree"), "golden-silk-saree");
/// assert_eq!(derive_item_id("Royal  Velvet\tCholi"), "royal-velvet-choli");
/// ```
pub fn derive_item_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('-');
            }
            in_whitespace = true;
        } else {
            id.push(c);
            in_whitespace = false;
        }
    }

    id
}

// =============================================================================
// Item
// =============================================================================

/// A rentable garment listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, rename = "ChaniyaCholi")]
pub struct Item {
    /// Derived from the name at creation, immutable afterwards.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Rental price per day.
    #[ts(type = "number")]
    pub price_per_day: Money,

    /// Image URL or `data:` URL.
    pub image_url: String,
}

/// Input for creating an item. The id is derived, never supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price_per_day: Money,
    pub image_url: String,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        price_per_day: impl Into<f64>,
        image_url: impl Into<String>,
    ) -> Self {
        NewItem {
            name: name.into(),
            price_per_day: Money::new(price_per_day),
            image_url: image_url.into(),
        }
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A reservation of one item for an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Booking {
    /// Unique within the ledger. Derived from the creation time in ms.
    #[ts(type = "number")]
    pub id: i64,

    /// The booked item.
    #[serde(rename = "choliId")]
    pub item_id: String,

    pub customer_name: String,

    /// Free-form contact string (usually a phone number).
    pub customer_contact: String,

    /// First booked day.
    #[ts(as = "String")]
    pub start_date: NaiveDate,

    /// Last booked day (inclusive).
    #[ts(as = "String")]
    pub end_date: NaiveDate,
}

impl Booking {
    /// Whether `date` falls inside `start_date ..= end_date`.
    #[inline]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether this booking shares at least one day with `start ..= end`.
    #[inline]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }

    /// Number of booked days. Zero for an inverted range.
    pub fn days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }

    /// Rental total at the given daily rate.
    pub fn quote(&self, price_per_day: Money) -> Money {
        price_per_day.for_days(self.days())
    }
}

/// Input for creating a booking. The id is assigned by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub item_id: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================
