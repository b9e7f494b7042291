//! NGO responsibility areas and their approval state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin review state of a responsibility area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    /// Submitted by the NGO, waiting for review
    Pending,
    Approved,
    Rejected,
}

/// A responsibility area as persisted: metadata plus the JSON-encoded
/// coordinate list the NGO drew on the map.
///
/// Only approved areas scope markers; pending and rejected ones are kept
/// for the review workflow but never index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsibilityArea {
    /// Row ID from the backing store
    pub id: i64,

    /// Owning NGO account
    pub ngo_id: i64,

    /// Display name, usually a neighbourhood
    pub name: String,

    pub status: AreaStatus,

    /// JSON-encoded `[[lat, lon], ...]` ring, exactly as stored
    pub geometry: String,

    pub created_at: DateTime<Utc>,
}

impl ResponsibilityArea {
    /// Create a new pending area awaiting review
    pub fn new(id: i64, ngo_id: i64, name: &str, geometry: String) -> Self {
        Self {
            id,
            ngo_id,
            name: name.to_string(),
            status: AreaStatus::Pending,
            geometry,
            created_at: Utc::now(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == AreaStatus::Approved
    }
}
