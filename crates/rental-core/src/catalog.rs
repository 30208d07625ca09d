//! # Catalog
//!
//! The ordered collection of rentable items.
//!
//! ## Add / Remove Rules
//! ```text
//! add("Golden Silk Saree", 4500, url)
//!      │
//!      ├── validate fields ───────────────► ValidationError
//!      ├── derive id "golden-silk-saree"
//!      ├── id already present? ───────────► ValidationError::Duplicate
//!      └── append (insertion order kept)
//!
//! remove("royal-velvet-choli", &ledger)
//!      │
//!      ├── unknown id? ───────────────────► CoreError::ItemNotFound
//!      ├── any booking references it? ────► CoreError::ItemHasBookings
//!      └── remove
//! ```
//!
//! A rejected operation never changes the collection.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::ledger::BookingLedger;
use crate::types::{derive_item_id, Item, NewItem};
use crate::validation::validate_new_item;

/// Rentable items in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    /// All items, insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Adds an item, deriving its id from the trimmed display name.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The stored item
    /// * `Err(CoreError::Validation(Duplicate))` - The derived id exists
    pub fn add(&mut self, new_item: NewItem) -> CoreResult<Item> {
        validate_new_item(&new_item)?;

        let name = new_item.name.trim().to_string();
        let id = derive_item_id(&name);

        if self.contains(&id) {
            return Err(ValidationError::Duplicate {
                field: "item id".to_string(),
                value: id,
            }
            .into());
        }

        let item = Item {
            id,
            name,
            price_per_day: new_item.price_per_day,
            image_url: new_item.image_url.trim().to_string(),
        };

        self.items.push(item.clone());
        Ok(item)
    }

    /// Checks that an item exists and nothing references it.
    pub fn ensure_removable(&self, id: &str, ledger: &BookingLedger) -> CoreResult<()> {
        if !self.contains(id) {
            return Err(CoreError::ItemNotFound(id.to_string()));
        }

        let count = ledger.count_for_item(id);
        if count > 0 {
            return Err(CoreError::ItemHasBookings {
                id: id.to_string(),
                count,
            });
        }

        Ok(())
    }

    /// Removes an item that no booking references.
    pub fn remove(&mut self, id: &str, ledger: &BookingLedger) -> CoreResult<Item> {
        self.ensure_removable(id, ledger)?;

        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

        Ok(self.items.remove(index))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::NewBooking;
    use chrono::NaiveDate;

    fn saree() -> NewItem {
        NewItem::new("Golden Silk Saree", 4500, "https://example.com/saree.jpg")
    }

    #[test]
    fn test_add_derives_id() {
        let mut catalog = Catalog::default();
        let item = catalog.add(saree()).unwrap();

        assert_eq!(item.id, "golden-silk-saree");
        assert_eq!(item.name, "Golden Silk Saree");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_trims_name_before_deriving() {
        let mut catalog = Catalog::default();
        let item = catalog
            .add(NewItem::new("  Golden   Silk Saree ", 4500, "https://example.com/a.jpg"))
            .unwrap();

        assert_eq!(item.id, "golden-silk-saree");
        assert_eq!(item.name, "Golden   Silk Saree");
    }

    #[test]
    fn test_add_duplicate_rejected_and_catalog_unchanged() {
        let mut catalog = Catalog::default();
        catalog.add(saree()).unwrap();
        let before = catalog.clone();

        let err = catalog.add(saree()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
        assert_eq!(catalog, before);
        assert_eq!(
            catalog
                .items()
                .iter()
                .filter(|item| item.id == "golden-silk-saree")
                .count(),
            1
        );
    }

    #[test]
    fn test_add_duplicate_by_case_and_spacing() {
        let mut catalog = Catalog::default();
        catalog.add(saree()).unwrap();

        let err = catalog
            .add(NewItem::new("GOLDEN silk  saree", 3000, "https://example.com/b.jpg"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_invalid_input_rejected() {
        let mut catalog = Catalog::default();
        assert!(catalog.add(NewItem::new("", 4500, "https://x.io/a.jpg")).is_err());
        assert!(catalog.add(NewItem::new("Saree", 0, "https://x.io/a.jpg")).is_err());
        assert!(catalog.add(NewItem::new("Saree", 100, "")).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = Catalog::new(seed::items());
        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "peacock-dream-lehenga",
                "royal-velvet-choli",
                "sunshine-bandhani",
                "pastel-floral-glory"
            ]
        );
    }

    #[test]
    fn test_remove_without_bookings() {
        let mut catalog = Catalog::new(seed::items());
        let ledger = BookingLedger::new(seed::bookings());

        let removed = catalog.remove("peacock-dream-lehenga", &ledger).unwrap();
        assert_eq!(removed.id, "peacock-dream-lehenga");
        assert!(!catalog.contains("peacock-dream-lehenga"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_remove_with_bookings_rejected() {
        let mut catalog = Catalog::new(seed::items());
        let ledger = BookingLedger::new(seed::bookings());
        let before = catalog.clone();

        let err = catalog.remove("royal-velvet-choli", &ledger).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ItemHasBookings { ref id, count: 1 } if id == "royal-velvet-choli"
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_remove_after_bookings_deleted() {
        let mut catalog = Catalog::new(seed::items());
        let mut ledger = BookingLedger::default();
        let booking = ledger
            .add(
                NewBooking {
                    item_id: "sunshine-bandhani".to_string(),
                    customer_name: "Anjali Sharma".to_string(),
                    customer_contact: "8765432109".to_string(),
                    start_date: NaiveDate::from_ymd_opt(2025, 9, 27).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
                },
                1_000,
            )
            .unwrap();

        assert!(catalog.remove("sunshine-bandhani", &ledger).is_err());
        ledger.remove(booking.id);
        assert!(catalog.remove("sunshine-bandhani", &ledger).is_ok());
    }

    #[test]
    fn test_remove_unknown_item() {
        let mut catalog = Catalog::new(seed::items());
        let err = catalog
            .remove("no-such-item", &BookingLedger::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::new(seed::items());
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['));

        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
