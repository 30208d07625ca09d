//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog / ledger rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rental-db errors (separate crate)                                     │
//! │  ├── DbError          - Storage failures                               │
//! │  └── StoreError       - Rejected(CoreError) | Storage(DbError)         │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → AppError → terminal  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and booking rule violations.
///
/// Every variant is recoverable: the collection it was raised against is
/// left exactly as it was.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No item with this identifier.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Item deletion blocked by bookings that still reference it.
    ///
    /// ## User Workflow
    /// ```text
    /// admin delete-item royal-velvet-choli
    ///      │
    ///      ▼
    /// 1 booking references it
    ///      │
    ///      ▼
    /// ItemHasBookings { id: "royal-velvet-choli", count: 1 }
    ///      │
    ///      ▼
    /// "delete the associated bookings first"
    /// ```
    #[error("Cannot delete {id}: it has {count} active booking(s), delete the associated bookings first")]
    ItemHasBookings { id: String, count: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. unparseable date, unsupported image reference).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A range whose start lies after its end.
    #[error("{field} starts on {start} but ends on {end}")]
    InvalidRange {
        field: String,
        start: String,
        end: String,
    },

    /// Duplicate value (e.g. an item name that derives an existing id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemHasBookings {
            id: "royal-velvet-choli".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cannot delete royal-velvet-choli: it has 2 active booking(s), delete the associated bookings first"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Duplicate {
            field: "item id".to_string(),
            value: "golden-silk-saree".to_string(),
        };
        assert_eq!(err.to_string(), "item id 'golden-silk-saree' already exists");

        let err = ValidationError::InvalidRange {
            field: "booking".to_string(),
            start: "2025-09-26".to_string(),
            end: "2025-09-24".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "booking starts on 2025-09-26 but ends on 2025-09-24"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
