//! CareFind - healthcare facility finder
//!
//! Ranks a static catalog of hospitals and clinics by distance from the
//! user's position, filters a facility's specialties by category, and
//! serves the same views, plus a small medical store catalog, as read-only
//! JSON.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{rank, categories, filter, haversine_distance, acquire_location, RankedView, ViewState, ViewAction, LocationOutcome};
pub use models::{Coordinate, Facility, Specialty, Product, RankedFacility};
pub use services::Catalog;
