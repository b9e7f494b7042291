//! MapCity - core domain logic for a citizen-reporting map application
//!
//! This library provides the shared types, area-coverage resolution and
//! registry document validation used by the API and moderation surfaces.

pub mod coverage;
pub mod document;
pub mod models;

pub use models::{AccountRole, DocumentKind, GeoPoint, Marker, ResponsibilityArea};
