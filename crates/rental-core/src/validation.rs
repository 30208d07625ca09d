//! # Validation Module
//!
//! Input validation for items and bookings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  ├── Argument presence and types (numbers, dates)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field rules (required, length, positive price, date order)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog / BookingLedger                                      │
//! │  ├── Duplicate item ids                                                │
//! │  └── Referential rules (bookings block item deletion)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::validation::{validate_item_name, validate_price};
//! use rental_core::Money;
//!
//! assert!(validate_item_name("Golden Silk Saree").is_ok());
//! assert!(validate_price(Money::new(0)).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewBooking, NewItem};
use crate::{MAX_CUSTOMER_FIELD_LEN, MAX_ITEM_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Date format used on the wire and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_ITEM_NAME_LEN` characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    required_with_max("name", name, MAX_ITEM_NAME_LEN)
}

/// Validates an image reference.
///
/// ## Rules
/// - Must not be empty
/// - Must be an `http(s)://` URL or an embedded `data:image/` URL
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_image_ref;
///
/// assert!(validate_image_ref("https://picsum.photos/seed/choli1/720/1280").is_ok());
/// assert!(validate_image_ref("data:image/png;base64,iVBORw0KGgo=").is_ok());
/// assert!(validate_image_ref("ftp://example.com/a.png").is_err());
/// ```
pub fn validate_image_ref(image: &str) -> ValidationResult<()> {
    let image = image.trim();

    if image.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    let accepted = image.starts_with("http://")
        || image.starts_with("https://")
        || image.starts_with("data:image/");

    if !accepted {
        return Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "must be an http(s) URL or a data:image/ URL".to_string(),
        });
    }

    Ok(())
}

/// Validates customer name and contact.
pub fn validate_customer(name: &str, contact: &str) -> ValidationResult<()> {
    required_with_max("customer name", name, MAX_CUSTOMER_FIELD_LEN)?;
    required_with_max("customer contact", contact, MAX_CUSTOMER_FIELD_LEN)
}

fn required_with_max(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily price. Must be a finite number greater than zero.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price per day".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price per day".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a `YYYY-MM-DD` date.
///
/// ## Example
/// ```rust
/// use rental_core::validation::parse_date;
///
/// assert!(parse_date("start date", "2025-09-24").is_ok());
/// assert!(parse_date("start date", "24/09/2025").is_err());
/// ```
pub fn parse_date(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("expected YYYY-MM-DD ({})", e),
        }
    })
}

/// Validates that a date range is not inverted. Single-day ranges are fine.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if start > end {
        return Err(ValidationError::InvalidRange {
            field: "booking".to_string(),
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates every field of a new item.
pub fn validate_new_item(item: &NewItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_price(item.price_per_day)?;
    validate_image_ref(&item.image_url)
}

/// Validates every field of a new booking except item existence,
/// which needs the catalog.
pub fn validate_new_booking(booking: &NewBooking) -> ValidationResult<()> {
    if booking.item_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item id".to_string(),
        });
    }
    validate_customer(&booking.customer_name, &booking.customer_contact)?;
    validate_date_range(booking.start_date, booking.end_date)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date("date", s).unwrap()
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Golden Silk Saree").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(101)).is_err());
        assert!(validate_item_name(&"A".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_image_ref() {
        assert!(validate_image_ref("http://example.com/a.jpg").is_ok());
        assert!(validate_image_ref("https://example.com/a.jpg").is_ok());
        assert!(validate_image_ref("data:image/jpeg;base64,/9j/4AAQ").is_ok());
        assert!(validate_image_ref("").is_err());
        assert!(validate_image_ref("a.jpg").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::new(1)).is_ok());
        assert!(validate_price(Money::new(1499.5)).is_ok());
        assert!(validate_price(Money::new(0.01)).is_ok());
        assert!(matches!(
            validate_price(Money::new(0)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_price(Money::new(-500)).is_err());
        assert!(matches!(
            validate_price(Money::new(f64::NAN)),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_price(Money::new(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_customer() {
        assert!(validate_customer("Priya Patel", "9876543210").is_ok());
        assert!(matches!(
            validate_customer("", "9876543210"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_customer("Priya Patel", " "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("start", " 2025-09-24 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 24).unwrap()
        );
        assert!(parse_date("start", "2025-02-30").is_err());
        assert!(parse_date("start", "tomorrow").is_err());
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range(date("2025-09-24"), date("2025-09-26")).is_ok());
        assert!(validate_date_range(date("2025-09-24"), date("2025-09-24")).is_ok());

        let err = validate_date_range(date("2025-09-27"), date("2025-09-24")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { .. }));
    }
}
