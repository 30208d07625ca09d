//! # rental-core: Pure Domain Logic for Rental Desk
//!
//! This crate holds the catalog and booking rules as pure functions and
//! plain collections. It never touches storage, the clock or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rental Desk Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rental-desk (CLI views)                      │   │
//! │  │        list ──► show / book ──► admin (add / delete)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               rental-db (RentalStore + key-value slots)         │   │
//! │  │          persists both collections after every mutation         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────────┐ ┌────────────┐    │   │
//! │  │   │  types   │ │ catalog  │ │    ledger    │ │availability│    │   │
//! │  │   │  Item    │ │ add /    │ │ add / remove │ │ is_booked  │    │   │
//! │  │   │  Booking │ │ remove   │ │ for_item     │ │ window     │    │   │
//! │  │   └──────────┘ └──────────┘ └──────────────┘ └────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (`Item`, `Booking`) and identifier derivation
//! - [`catalog`] - The ordered collection of rentable items
//! - [`ledger`] - The ordered collection of bookings
//! - [`availability`] - Which dates are booked for an item
//! - [`money`] - Whole-unit money for prices and rental quotes
//! - [`validation`] - Input validation
//! - [`seed`] - Default dataset used when storage is empty or unreadable
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{Catalog, NewItem};
//!
//! let mut catalog = Catalog::default();
//! let item = catalog
//!     .add(NewItem::new("Golden Silk Saree", 4500, "https://example.com/saree.jpg"))
//!     .unwrap();
//!
//! assert_eq!(item.id, "golden-silk-saree");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::BookingLedger;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage slot holding the item collection.
///
/// The name predates the generic "item" terminology; browser profiles
/// already hold data under it, so it stays.
pub const ITEMS_SLOT: &str = "cholis";

/// Storage slot holding the booking collection.
pub const BOOKINGS_SLOT: &str = "bookings";

/// Maximum length of an item display name.
pub const MAX_ITEM_NAME_LEN: usize = 100;

/// Maximum length of customer name and contact fields.
pub const MAX_CUSTOMER_FIELD_LEN: usize = 120;
