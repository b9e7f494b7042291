//! Scoping markers to NGO responsibility areas.

use std::sync::Arc;
use tracing::debug;

use super::{load_boundaries, AreaBoundary, AreaIndex};
use crate::models::{GeoPoint, Marker, ResponsibilityArea};

/// Coverage lookup service.
///
/// Answers which approved areas cover a point and filters marker lists
/// down to an NGO's jurisdiction.
pub struct CoverageService {
    index: AreaIndex,
}

impl CoverageService {
    /// Create a coverage service from a prebuilt index
    pub fn new(index: AreaIndex) -> Self {
        Self { index }
    }

    /// Build from stored area rows.
    ///
    /// Only approved areas are indexed; pending and rejected ones never
    /// scope markers.
    pub fn from_areas(areas: Vec<ResponsibilityArea>) -> Self {
        let approved: Vec<ResponsibilityArea> =
            areas.into_iter().filter(|a| a.is_approved()).collect();

        let boundaries = load_boundaries(approved);
        Self::new(AreaIndex::build(boundaries))
    }

    /// All approved areas containing a point
    pub fn areas_containing(&self, point: &GeoPoint) -> Vec<Arc<AreaBoundary>> {
        let areas = self.index.lookup(point);

        debug!(
            "Coverage lookup at ({}, {}): {} containing areas",
            point.lat,
            point.lon,
            areas.len()
        );

        areas
    }

    /// NGOs responsible for a point, deduplicated
    pub fn responsible_ngos(&self, point: &GeoPoint) -> Vec<i64> {
        let mut ngos: Vec<i64> = self
            .areas_containing(point)
            .iter()
            .map(|b| b.area.ngo_id)
            .collect();
        ngos.sort_unstable();
        ngos.dedup();
        ngos
    }

    /// Whether a point falls inside any of an NGO's approved areas
    pub fn in_ngo_scope(&self, point: &GeoPoint, ngo_id: i64) -> bool {
        self.index
            .boundaries_for_ngo(ngo_id)
            .iter()
            .any(|b| b.ring.contains(point))
    }

    /// Filter markers down to those inside the NGO's approved areas
    pub fn scope_markers<'a>(&self, markers: &'a [Marker], ngo_id: i64) -> Vec<&'a Marker> {
        let scoped: Vec<&Marker> = markers
            .iter()
            .filter(|m| self.in_ngo_scope(&m.location, ngo_id))
            .collect();

        debug!(
            "Scoped {} of {} markers to NGO {}",
            scoped.len(),
            markers.len(),
            ngo_id
        );

        scoped
    }

    /// The underlying index (for stats/debugging)
    pub fn index(&self) -> &AreaIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaStatus, IssueCategory};

    fn approved_area(id: i64, ngo_id: i64, geometry: &str) -> ResponsibilityArea {
        let mut area = ResponsibilityArea::new(id, ngo_id, "test", geometry.to_string());
        area.status = AreaStatus::Approved;
        area
    }

    #[test]
    fn test_empty_service() {
        let service = CoverageService::new(AreaIndex::build(vec![]));

        assert!(service.areas_containing(&GeoPoint::new(5.0, 5.0)).is_empty());
        assert!(!service.in_ngo_scope(&GeoPoint::new(5.0, 5.0), 1));
    }

    #[test]
    fn test_only_approved_areas_scope() {
        let pending =
            ResponsibilityArea::new(1, 10, "pending", "[[0,0],[0,10],[10,10],[10,0]]".to_string());
        let approved = approved_area(2, 20, "[[0,0],[0,10],[10,10],[10,0]]");

        let service = CoverageService::from_areas(vec![pending, approved]);

        assert_eq!(service.index().len(), 1);
        assert_eq!(service.responsible_ngos(&GeoPoint::new(5.0, 5.0)), vec![20]);
    }

    #[test]
    fn test_scope_markers() {
        let service = CoverageService::from_areas(vec![
            approved_area(1, 10, "[[0,0],[0,10],[10,10],[10,0]]"),
            approved_area(2, 10, "[[20,20],[20,30],[30,30],[30,20]]"),
            approved_area(3, 99, "[[40,40],[40,50],[50,50],[50,40]]"),
        ]);

        let markers = vec![
            Marker::new(1, 501, IssueCategory::Trash, GeoPoint::new(5.0, 5.0)),
            Marker::new(2, 502, IssueCategory::Pothole, GeoPoint::new(25.0, 25.0)),
            Marker::new(3, 503, IssueCategory::Lighting, GeoPoint::new(45.0, 45.0)),
            Marker::new(4, 504, IssueCategory::Trash, GeoPoint::new(-5.0, -5.0)),
        ];

        let scoped = service.scope_markers(&markers, 10);
        let ids: Vec<i64> = scoped.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);

        assert!(service.scope_markers(&markers, 7).is_empty());
    }

    #[test]
    fn test_overlapping_areas_dedup_ngos() {
        let service = CoverageService::from_areas(vec![
            approved_area(1, 10, "[[0,0],[0,10],[10,10],[10,0]]"),
            approved_area(2, 10, "[[0,0],[0,20],[20,20],[20,0]]"),
            approved_area(3, 30, "[[0,0],[0,15],[15,15],[15,0]]"),
        ]);

        assert_eq!(
            service.responsible_ngos(&GeoPoint::new(5.0, 5.0)),
            vec![10, 30]
        );
    }
}
