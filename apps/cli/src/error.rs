//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Rental Desk                            │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<String, AppError>                                               │
//! │         │                                                               │
//! │         ├── Rule refused?   StoreError::Rejected(CoreError) ──┐        │
//! │         ├── Storage failed? StoreError::Storage(DbError) ─────┤        │
//! │         │                                                     ▼        │
//! │         │                                                 AppError     │
//! │         │                                                     │        │
//! │         ▼                                                     ▼        │
//! │  stdout: rendered view              stderr: "error: [CODE] message"    │
//! │                                     exit status 1                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use rental_core::CoreError;
use rental_db::{DbError, StoreError};

/// Error returned from commands.
#[derive(Debug, Clone)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Item does not exist
    NotFound,

    /// Input validation failed (including duplicate item names)
    ValidationError,

    /// Operation blocked by dependent records
    Conflict,

    /// Storage operation failed
    DatabaseError,

    /// Anything else (data directory, etc.)
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => AppError::new(
                ErrorCode::DatabaseError,
                format!("Could not open the database: {}", e),
            ),
            DbError::MigrationFailed(e) => {
                tracing::error!("Migration failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database is busy, try again")
            }
            other => {
                tracing::error!("Storage error: {}", other);
                AppError::new(ErrorCode::DatabaseError, "Could not save changes")
            }
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => AppError::not_found("Item", &id),
            e @ CoreError::ItemHasBookings { .. } => AppError::new(ErrorCode::Conflict, e.to_string()),
            CoreError::Validation(e) => AppError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(e) => e.into(),
            StoreError::Storage(e) => e.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for commands.
pub type AppResult<T> = Result<T, AppError>;
