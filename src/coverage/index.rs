//! Spatial index for responsibility-area lookups.

use hashbrown::HashMap;
use rstar::{RTree, RTreeObject, AABB};
use std::sync::Arc;
use tracing::info;

use super::AreaBoundary;
use crate::models::GeoPoint;

/// Wrapper for R-tree indexing of area boundaries
#[derive(Clone)]
pub struct IndexedArea {
    pub boundary: Arc<AreaBoundary>,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedArea {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedArea {
    pub fn new(boundary: AreaBoundary) -> Option<Self> {
        let (min_lon, min_lat, max_lon, max_lat) = boundary.bbox()?;
        Some(Self {
            boundary: Arc::new(boundary),
            envelope: AABB::from_corners([min_lon, min_lat], [max_lon, max_lat]),
        })
    }
}

/// R-tree index over area boundaries with a per-NGO grouping
pub struct AreaIndex {
    tree: RTree<IndexedArea>,
    by_ngo: HashMap<i64, Vec<Arc<AreaBoundary>>>,
}

impl AreaIndex {
    /// Build the index from resolved boundaries
    pub fn build(boundaries: Vec<AreaBoundary>) -> Self {
        info!("Building area index for {} boundaries...", boundaries.len());

        let indexed: Vec<IndexedArea> = boundaries
            .into_iter()
            .filter_map(IndexedArea::new)
            .collect();

        let mut by_ngo: HashMap<i64, Vec<Arc<AreaBoundary>>> = HashMap::new();
        for ia in &indexed {
            by_ngo
                .entry(ia.boundary.area.ngo_id)
                .or_default()
                .push(Arc::clone(&ia.boundary));
        }

        let tree = RTree::bulk_load(indexed);

        info!(
            "Area index built with {} entries across {} NGOs",
            tree.size(),
            by_ngo.len()
        );

        Self { tree, by_ngo }
    }

    /// Find all area boundaries containing a point
    pub fn lookup(&self, point: &GeoPoint) -> Vec<Arc<AreaBoundary>> {
        let query_envelope = AABB::from_point([point.lon, point.lat]);

        // Envelope candidates from the R-tree, confirmed with the exact test
        self.tree
            .locate_in_envelope_intersecting(&query_envelope)
            .filter(|ia| ia.boundary.ring.contains(point))
            .map(|ia| Arc::clone(&ia.boundary))
            .collect()
    }

    /// All boundaries registered to one NGO
    pub fn boundaries_for_ngo(&self, ngo_id: i64) -> &[Arc<AreaBoundary>] {
        self.by_ngo.get(&ngo_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of indexed boundaries
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Iterate over all indexed boundaries
    pub fn boundaries(&self) -> impl Iterator<Item = &Arc<AreaBoundary>> {
        self.tree.iter().map(|ia| &ia.boundary)
    }
}
