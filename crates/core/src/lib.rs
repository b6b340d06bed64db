//! Domain types for the missions service.
//!
//! Nothing in here touches HTTP or the database; the API crate parses
//! request bodies into [`serde_json::Value`] and hands them to
//! [`mission::NewMission::from_json`] before any store call.

pub mod error;
pub mod mission;
