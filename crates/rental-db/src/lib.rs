//! # rental-db: Storage Layer for Rental Desk
//!
//! This crate persists the catalog and booking collections in a local
//! SQLite file, using sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rental Desk Data Flow                            │
//! │                                                                         │
//! │  CLI command (book, admin delete-item, ...)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     rental-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  RentalStore  │    │ SlotRepository│    │   Database   │  │   │
//! │  │   │  (store.rs)   │───►│  (slot.rs)    │───►│  (pool.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Catalog       │    │ get / put     │    │ SqlitePool   │  │   │
//! │  │   │ BookingLedger │    │ JSON values   │    │ migrations   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   SQLite: kv_store("cholis" → [...], "bookings" → [...])       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The key-value slot repository
//! - [`store`] - `RentalStore`, the catalog + booking store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rental_db::{Database, DbConfig, RentalStore};
//!
//! let db = Database::new(DbConfig::new("path/to/rental.db")).await?;
//! let mut store = RentalStore::open(&db).await?;
//!
//! let item = store.add_item(NewItem::new("Golden Silk Saree", 4500, url)).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::slot::SlotRepository;
pub use store::{Clock, LoadSource, RentalStore, StoreError, StoreResult, SystemClock};
