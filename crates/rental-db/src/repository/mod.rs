//! # Repository Module
//!
//! Database repository implementations for Rental Desk.
//!
//! ## Available Repositories
//!
//! - [`slot::SlotRepository`] - Whole-collection JSON values keyed by name
//!
//! The catalog and booking collections are small and always read and
//! written whole, so they live in key-value slots rather than one row per
//! record.

pub mod slot;
