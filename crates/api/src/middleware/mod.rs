//! Request guards for the mission routes.
//!
//! - [`store::require_store`] -- Rejects every request up front when no store is configured.
//! - [`store::Store`] -- Extracts the configured store in handlers.

pub mod store;
