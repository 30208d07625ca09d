//! # Rental Store
//!
//! Owns the catalog and the booking ledger, and persists each collection to
//! its slot after every successful mutation.
//!
//! ## Load / Mutate / Persist
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  open(&db)                                                              │
//! │     ├── slot "cholis"   ─ missing ──► seed::items()    (info)           │
//! │     │                   ─ corrupt ──► seed::items()    (warn)           │
//! │     │                   ─ ok      ──► stored items                      │
//! │     ├── slot "bookings" ─ same rules with seed::bookings()              │
//! │     └── seeded collections are written straight back                    │
//! │                                                                         │
//! │  add_item / remove_item / add_booking / remove_booking                  │
//! │     ├── apply the rule on the in-memory collection (may be Rejected)   │
//! │     ├── write the whole collection to its slot                         │
//! │     └── write failed? restore the previous collection, return Storage  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never prompts. Callers that want a confirmation step ask
//! before calling the destructive methods.

use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use rental_core::{
    availability, seed, Booking, BookingLedger, Catalog, CoreError, Item, NewBooking, NewItem,
    BOOKINGS_SLOT, ITEMS_SLOT,
};

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use crate::repository::slot::SlotRepository;

// =============================================================================
// Errors
// =============================================================================

/// A store operation was either refused by a rule or failed to persist.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A catalog or booking rule refused the operation. Nothing changed.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// The collection could not be written. The in-memory state was rolled back.
    #[error(transparent)]
    Storage(#[from] DbError),
}

pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Clock
// =============================================================================

/// Source of booking ids.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// =============================================================================
// Load Source
// =============================================================================

/// Where a collection came from when the store was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Read from its slot.
    Persisted,
    /// The slot did not exist; the seed dataset was used.
    Missing,
    /// The slot could not be read or parsed; the seed dataset was used.
    Corrupt(String),
}

impl LoadSource {
    pub fn is_seeded(&self) -> bool {
        !matches!(self, LoadSource::Persisted)
    }
}

// =============================================================================
// Rental Store
// =============================================================================

/// The catalog and booking store.
#[derive(Debug)]
pub struct RentalStore {
    slots: SlotRepository,
    catalog: Catalog,
    ledger: BookingLedger,
    clock: Box<dyn Clock>,
    items_source: LoadSource,
    bookings_source: LoadSource,
}

impl RentalStore {
    /// Opens the store using the system clock for booking ids.
    pub async fn open(db: &Database) -> StoreResult<Self> {
        Self::open_with_clock(db, Box::new(SystemClock)).await
    }

    /// Opens the store with an explicit clock.
    pub async fn open_with_clock(db: &Database, clock: Box<dyn Clock>) -> StoreResult<Self> {
        let slots = db.slots();

        let (items, items_source) = load_or_seed(&slots, ITEMS_SLOT, seed::items).await;
        let (bookings, bookings_source) = load_or_seed(&slots, BOOKINGS_SLOT, seed::bookings).await;

        let store = RentalStore {
            slots,
            catalog: Catalog::new(items),
            ledger: BookingLedger::new(bookings),
            clock,
            items_source,
            bookings_source,
        };

        if store.items_source.is_seeded() {
            store.persist_items().await?;
        }
        if store.bookings_source.is_seeded() {
            store.persist_bookings().await?;
        }

        let orphaned = store.orphaned_bookings().len();
        if orphaned > 0 {
            warn!(count = orphaned, "Bookings reference items missing from the catalog");
        }

        info!(
            items = store.catalog.len(),
            bookings = store.ledger.len(),
            "Rental store opened"
        );

        Ok(store)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    /// All items, insertion order.
    pub fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.catalog.get(id)
    }

    /// All bookings, insertion order.
    pub fn bookings(&self) -> &[Booking] {
        self.ledger.bookings()
    }

    pub fn bookings_for_item(&self, item_id: &str) -> Vec<&Booking> {
        self.ledger.for_item(item_id)
    }

    /// How the item and booking collections were loaded.
    pub fn load_sources(&self) -> (&LoadSource, &LoadSource) {
        (&self.items_source, &self.bookings_source)
    }

    /// Bookings whose item is not in the catalog.
    pub fn orphaned_bookings(&self) -> Vec<&Booking> {
        self.ledger
            .bookings()
            .iter()
            .filter(|b| !self.catalog.contains(&b.item_id))
            .collect()
    }

    /// Whether `date` is booked for `item_id`.
    pub fn is_booked(&self, item_id: &str, date: NaiveDate) -> bool {
        availability::is_booked(self.ledger.bookings(), item_id, date)
    }

    /// The booking an unbook of `date` would delete.
    pub fn booking_covering(&self, item_id: &str, date: NaiveDate) -> Option<&Booking> {
        self.ledger.find_covering(item_id, date)
    }

    // -------------------------------------------------------------------------
    // Catalog mutations
    // -------------------------------------------------------------------------

    /// Adds an item and persists the catalog.
    pub async fn add_item(&mut self, new_item: NewItem) -> StoreResult<Item> {
        let before = self.catalog.clone();
        let item = self.catalog.add(new_item)?;

        if let Err(e) = self.persist_items().await {
            self.catalog = before;
            return Err(e.into());
        }

        info!(id = %item.id, "Item added");
        Ok(item)
    }

    /// Checks that an item exists and no booking references it, without
    /// changing anything. Callers use it before asking for confirmation.
    pub fn ensure_item_removable(&self, id: &str) -> StoreResult<()> {
        Ok(self.catalog.ensure_removable(id, &self.ledger)?)
    }

    /// Removes an item with no bookings and persists the catalog.
    pub async fn remove_item(&mut self, id: &str) -> StoreResult<Item> {
        let before = self.catalog.clone();
        let item = self.catalog.remove(id, &self.ledger)?;

        if let Err(e) = self.persist_items().await {
            self.catalog = before;
            return Err(e.into());
        }

        info!(id = %item.id, "Item removed");
        Ok(item)
    }

    // -------------------------------------------------------------------------
    // Booking mutations
    // -------------------------------------------------------------------------

    /// Adds a booking for an existing item and persists the ledger.
    ///
    /// Overlap with existing bookings is allowed.
    pub async fn add_booking(&mut self, new_booking: NewBooking) -> StoreResult<Booking> {
        if !self.catalog.contains(&new_booking.item_id) {
            return Err(CoreError::ItemNotFound(new_booking.item_id).into());
        }

        let before = self.ledger.clone();
        let booking = self.ledger.add(new_booking, self.clock.now_ms())?;

        if let Err(e) = self.persist_bookings().await {
            self.ledger = before;
            return Err(e.into());
        }

        info!(
            id = booking.id,
            item = %booking.item_id,
            start = %booking.start_date,
            end = %booking.end_date,
            "Booking added"
        );
        Ok(booking)
    }

    /// Removes a booking and persists the ledger.
    ///
    /// Returns `Ok(None)` without writing when the id is unknown.
    pub async fn remove_booking(&mut self, id: i64) -> StoreResult<Option<Booking>> {
        let before = self.ledger.clone();
        let Some(booking) = self.ledger.remove(id) else {
            debug!(id, "No booking to remove");
            return Ok(None);
        };

        if let Err(e) = self.persist_bookings().await {
            self.ledger = before;
            return Err(e.into());
        }

        info!(id, item = %booking.item_id, "Booking removed");
        Ok(Some(booking))
    }

    /// Deletes the first booking of `item_id` that covers `date`.
    ///
    /// A miss is logged and changes nothing.
    pub async fn unbook_date(
        &mut self,
        item_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Option<Booking>> {
        let Some(id) = self.booking_covering(item_id, date).map(|b| b.id) else {
            warn!(item = %item_id, date = %date, "Could not find booking for the selected date to unbook");
            return Ok(None);
        };

        self.remove_booking(id).await
    }

    // -------------------------------------------------------------------------
    // Maintenance
    // -------------------------------------------------------------------------

    /// Replaces both collections with the seed dataset and persists them.
    pub async fn reset_to_seed(&mut self) -> StoreResult<()> {
        self.catalog = Catalog::new(seed::items());
        self.ledger = BookingLedger::new(seed::bookings());
        self.persist_items().await?;
        self.persist_bookings().await?;

        info!("Store reset to seed dataset");
        Ok(())
    }

    async fn persist_items(&self) -> DbResult<()> {
        self.slots.put_json(ITEMS_SLOT, &self.catalog).await
    }

    async fn persist_bookings(&self) -> DbResult<()> {
        self.slots.put_json(BOOKINGS_SLOT, &self.ledger).await
    }
}

/// Reads and parses a slot, substituting `seed()` when it is missing,
/// unreadable or unparseable.
async fn load_or_seed<T, F>(slots: &SlotRepository, key: &str, seed: F) -> (Vec<T>, LoadSource)
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let raw = match slots.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!(slot = %key, "No stored data, using seed dataset");
            return (seed(), LoadSource::Missing);
        }
        Err(e) => {
            warn!(slot = %key, error = %e, "Failed to read stored data, using seed dataset");
            return (seed(), LoadSource::Corrupt(e.to_string()));
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(values) => (values, LoadSource::Persisted),
        Err(e) => {
            warn!(slot = %key, error = %e, "Failed to parse stored data, using seed dataset");
            (seed(), LoadSource::Corrupt(e.to_string()))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbConfig;
    use rental_core::ValidationError;

    #[derive(Debug)]
    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn saree() -> NewItem {
        NewItem::new("Golden Silk Saree", 4500, "https://example.com/saree.jpg")
    }

    fn new_booking(item_id: &str, start: &str, end: &str) -> NewBooking {
        NewBooking {
            item_id: item_id.to_string(),
            customer_name: "Kavya Rao".to_string(),
            customer_contact: "9988776655".to_string(),
            start_date: date(start),
            end_date: date(end),
        }
    }

    async fn setup() -> (Database, RentalStore) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = RentalStore::open_with_clock(&db, Box::new(FixedClock(1_000)))
            .await
            .unwrap();
        (db, store)
    }

    #[tokio::test]
    async fn test_empty_storage_opens_with_seed_and_writes_it_back() {
        let (db, store) = setup().await;

        assert_eq!(store.items(), seed::items().as_slice());
        assert_eq!(store.bookings(), seed::bookings().as_slice());
        assert_eq!(store.load_sources(), (&LoadSource::Missing, &LoadSource::Missing));

        let keys = db.slots().keys().await.unwrap();
        assert_eq!(keys, vec!["bookings".to_string(), "cholis".to_string()]);
    }

    #[tokio::test]
    async fn test_corrupt_slot_falls_back_to_seed() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.slots().put(ITEMS_SLOT, "{definitely not json").await.unwrap();
        db.slots().put(BOOKINGS_SLOT, "[]").await.unwrap();

        let store = RentalStore::open(&db).await.unwrap();

        assert!(matches!(store.load_sources().0, LoadSource::Corrupt(_)));
        assert_eq!(store.load_sources().1, &LoadSource::Persisted);
        assert_eq!(store.items(), seed::items().as_slice());
        assert!(store.bookings().is_empty());

        // Seed was written back over the corrupt value
        let raw = db.slots().get(ITEMS_SLOT).await.unwrap().unwrap();
        let parsed: Vec<Item> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, seed::items());
    }

    #[tokio::test]
    async fn test_mutations_survive_reopen() {
        let (db, mut store) = setup().await;

        store.add_item(saree()).await.unwrap();
        let booking = store
            .add_booking(new_booking("golden-silk-saree", "2025-10-02", "2025-10-04"))
            .await
            .unwrap();
        store.remove_booking(1).await.unwrap();

        let reopened = RentalStore::open(&db).await.unwrap();
        assert_eq!(reopened.load_sources(), (&LoadSource::Persisted, &LoadSource::Persisted));
        assert_eq!(reopened.items(), store.items());
        assert_eq!(reopened.bookings(), store.bookings());
        assert!(reopened.ledger().get(booking.id).is_some());
        assert!(reopened.ledger().get(1).is_none());
    }

    #[tokio::test]
    async fn test_add_item_golden_silk_saree() {
        let (_db, mut store) = setup().await;

        let item = store.add_item(saree()).await.unwrap();
        assert_eq!(item.id, "golden-silk-saree");

        let err = store.add_item(saree()).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Rejected(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
        assert_eq!(
            store
                .items()
                .iter()
                .filter(|i| i.id == "golden-silk-saree")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_remove_item_blocked_by_bookings() {
        let (db, mut store) = setup().await;

        let err = store.remove_item("royal-velvet-choli").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Rejected(CoreError::ItemHasBookings { count: 1, .. })
        ));
        assert!(store.ensure_item_removable("royal-velvet-choli").is_err());
        assert!(store.item("royal-velvet-choli").is_some());

        store.remove_item("peacock-dream-lehenga").await.unwrap();
        assert!(store.item("peacock-dream-lehenga").is_none());

        let reopened = RentalStore::open(&db).await.unwrap();
        assert!(reopened.item("peacock-dream-lehenga").is_none());
        assert_eq!(reopened.items().len(), 3);
    }

    #[tokio::test]
    async fn test_add_booking_for_unknown_item_rejected() {
        let (_db, mut store) = setup().await;

        let err = store
            .add_booking(new_booking("no-such-item", "2025-10-01", "2025-10-02"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected(CoreError::ItemNotFound(_))));
        assert_eq!(store.bookings().len(), 2);
    }

    #[tokio::test]
    async fn test_add_booking_uses_clock_and_stays_unique() {
        let (_db, mut store) = setup().await;

        let a = store
            .add_booking(new_booking("pastel-floral-glory", "2025-10-01", "2025-10-02"))
            .await
            .unwrap();
        let b = store
            .add_booking(new_booking("pastel-floral-glory", "2025-10-05", "2025-10-06"))
            .await
            .unwrap();

        assert_eq!(a.id, 1_000);
        assert_eq!(b.id, 1_001);
        assert!(store.is_booked("pastel-floral-glory", date("2025-10-06")));
    }

    #[tokio::test]
    async fn test_remove_unknown_booking_is_noop() {
        let (_db, mut store) = setup().await;

        assert!(store.remove_booking(424242).await.unwrap().is_none());
        assert_eq!(store.bookings(), seed::bookings().as_slice());
    }

    #[tokio::test]
    async fn test_bookings_for_item_borrows_from_ledger() {
        let (_db, mut store) = setup().await;
        store
            .add_booking(new_booking("royal-velvet-choli", "2025-10-01", "2025-10-02"))
            .await
            .unwrap();

        let ids: Vec<i64> = store
            .bookings_for_item("royal-velvet-choli")
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1, 1_000]);
        assert!(store.bookings_for_item("pastel-floral-glory").is_empty());
    }

    #[tokio::test]
    async fn test_unbook_date() {
        let (_db, mut store) = setup().await;

        // Miss: nothing covers the 23rd
        assert!(store
            .unbook_date("royal-velvet-choli", date("2025-09-23"))
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.bookings().len(), 2);

        let removed = store
            .unbook_date("royal-velvet-choli", date("2025-09-25"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(removed.id, 1);
        assert!(!store.is_booked("royal-velvet-choli", date("2025-09-25")));
        assert!(store.is_booked("sunshine-bandhani", date("2025-09-28")));
    }

    #[tokio::test]
    async fn test_orphaned_bookings_are_reported_not_dropped() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.slots().put(ITEMS_SLOT, "not json").await.unwrap();
        db.slots()
            .put(
                BOOKINGS_SLOT,
                r#"[{"id":5,"choliId":"custom-lehenga","customerName":"A","customerContact":"1","startDate":"2025-01-01","endDate":"2025-01-02"}]"#,
            )
            .await
            .unwrap();

        let store = RentalStore::open(&db).await.unwrap();
        assert_eq!(store.bookings().len(), 1);
        assert_eq!(store.orphaned_bookings().len(), 1);
    }

    #[tokio::test]
    async fn test_browser_written_slots_load_as_persisted() {
        const CHOLIS: &str = r#"[{"id":"mint-chikankari-kurta","name":"Mint Chikankari Kurta","pricePerDay":1499.5,"imageUrl":"img/kurta.png"}]"#;
        const BOOKINGS: &str = r#"[{"id":1727000000000,"choliId":"mint-chikankari-kurta","customerName":"Ritu Desai","customerContact":"ritu@example.com","startDate":"2025-10-05","endDate":"2025-10-01"}]"#;

        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.slots().put(ITEMS_SLOT, CHOLIS).await.unwrap();
        db.slots().put(BOOKINGS_SLOT, BOOKINGS).await.unwrap();

        let mut store = RentalStore::open(&db).await.unwrap();
        assert_eq!(store.load_sources(), (&LoadSource::Persisted, &LoadSource::Persisted));

        let item = store.item("mint-chikankari-kurta").unwrap();
        assert_eq!(item.name, "Mint Chikankari Kurta");
        assert_eq!(item.price_per_day.amount(), 1499.5);
        assert_eq!(item.image_url, "img/kurta.png");
        assert_eq!(store.items().len(), 1);

        let booking = &store.bookings()[0];
        assert_eq!(booking.id, 1_727_000_000_000);
        assert_eq!(booking.item_id, "mint-chikankari-kurta");
        assert_eq!(booking.customer_name, "Ritu Desai");
        assert_eq!(booking.customer_contact, "ritu@example.com");
        assert_eq!(booking.start_date, date("2025-10-05"));
        assert_eq!(booking.end_date, date("2025-10-01"));
        assert_eq!(store.bookings().len(), 1);

        // Nothing was seeded or rewritten on open
        assert_eq!(db.slots().get(ITEMS_SLOT).await.unwrap().unwrap(), CHOLIS);
        assert_eq!(db.slots().get(BOOKINGS_SLOT).await.unwrap().unwrap(), BOOKINGS);

        // A later write keeps the fractional price
        store.add_item(saree()).await.unwrap();
        let raw = db.slots().get(ITEMS_SLOT).await.unwrap().unwrap();
        assert!(raw.contains(r#""pricePerDay":1499.5"#));
        assert!(raw.contains(r#""pricePerDay":4500"#));
    }

    #[tokio::test]
    async fn test_write_failure_rolls_back() {
        let (db, mut store) = setup().await;
        db.close().await;

        let err = store.add_item(saree()).await.unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(store.item("golden-silk-saree").is_none());

        let err = store.remove_booking(1).await.unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(store.ledger().get(1).is_some());
    }

    #[tokio::test]
    async fn test_reset_to_seed() {
        let (db, mut store) = setup().await;
        store.add_item(saree()).await.unwrap();
        store.remove_booking(2).await.unwrap();

        store.reset_to_seed().await.unwrap();
        assert_eq!(store.items(), seed::items().as_slice());

        let reopened = RentalStore::open(&db).await.unwrap();
        assert_eq!(reopened.bookings(), seed::bookings().as_slice());
    }
}
