//! Core data models for the MapCity domain.

pub mod account;
pub mod area;
pub mod document;
pub mod marker;

pub use account::AccountRole;
pub use area::{AreaStatus, ResponsibilityArea};
pub use document::{DocumentKind, DocumentValidation, InvalidReason};
pub use marker::{GeoPoint, IssueCategory, Marker, MarkerStatus};
