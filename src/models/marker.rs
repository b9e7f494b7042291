//! Citizen-report markers dropped on the map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Category of urban issue a marker reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Trash,
    Pothole,
    Lighting,
}

/// Lifecycle of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    /// Freshly reported, visible on the map
    Open,
    /// An NGO picked the issue up
    InProgress,
    Resolved,
    /// Removed from public view by a moderator
    Rejected,
}

/// A citizen-reported issue pinned to a map location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    /// Row ID from the backing store
    pub id: i64,

    /// Account that reported the issue
    pub reporter_id: i64,

    pub category: IssueCategory,

    pub status: MarkerStatus,

    /// Where the issue was reported
    pub location: GeoPoint,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Report timestamp
    pub reported_at: DateTime<Utc>,
}

impl Marker {
    /// Create a new open marker at a location
    pub fn new(id: i64, reporter_id: i64, category: IssueCategory, location: GeoPoint) -> Self {
        Self {
            id,
            reporter_id,
            category,
            status: MarkerStatus::Open,
            location,
            description: None,
            reported_at: Utc::now(),
        }
    }
}
