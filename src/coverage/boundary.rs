//! Resolving stored areas into indexable boundaries.

use tracing::{info, warn};

use super::geometry::parse_ring;
use super::Ring;
use crate::models::ResponsibilityArea;

/// A responsibility area paired with its resolved polygon ring
#[derive(Debug, Clone)]
pub struct AreaBoundary {
    pub area: ResponsibilityArea,
    pub ring: Ring,
}

impl AreaBoundary {
    /// Resolve a stored area into a boundary.
    ///
    /// `None` when the stored geometry is malformed or has too few
    /// vertices to enclose anything; the row itself stays untouched in
    /// the backing store for the NGO to fix.
    pub fn resolve(area: ResponsibilityArea) -> Option<Self> {
        let ring = match parse_ring(&area.geometry) {
            Ok(ring) => ring,
            Err(err) => {
                warn!("Dropping area {} ({}): {}", area.id, area.name, err);
                return None;
            }
        };

        if ring.is_degenerate() {
            warn!(
                "Dropping area {} ({}): ring has only {} vertices",
                area.id,
                area.name,
                ring.len()
            );
            return None;
        }

        Some(Self { area, ring })
    }

    /// Bounding box of the ring as (min_lon, min_lat, max_lon, max_lat)
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        self.ring.bbox()
    }
}

/// Resolve a batch of stored areas, skipping rows with bad geometry
pub fn load_boundaries(areas: Vec<ResponsibilityArea>) -> Vec<AreaBoundary> {
    let total = areas.len();

    let boundaries: Vec<AreaBoundary> = areas
        .into_iter()
        .filter_map(AreaBoundary::resolve)
        .collect();

    info!("Resolved {} of {} area geometries", boundaries.len(), total);

    boundaries
}
