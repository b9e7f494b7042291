//! Polygon ring type and the ray-casting membership test.

use geo::{BoundingRect, Centroid, Coord, LineString, Polygon};

use crate::models::GeoPoint;

/// An ordered vertex ring describing a responsibility-area polygon.
///
/// The ring is implicitly closed: the last vertex connects back to the
/// first. A stored closing vertex equal to the first is accepted and
/// changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(Vec<GeoPoint>);

impl Ring {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A ring needs at least 3 vertices to enclose anything
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < 3
    }

    /// Even-odd ray-casting membership test.
    ///
    /// Walks the edges with `j` trailing `i` (wrapping from the last
    /// vertex to the first) and toggles the inside flag on every crossing
    /// of the horizontal ray through the point. Degenerate rings contain
    /// nothing. Points exactly on an edge or vertex may land on either
    /// side; callers must not rely on boundary behavior.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let pts = &self.0;
        if pts.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (vi, vj) = (pts[i], pts[j]);

            // Edge straddles the point's longitude: exclusive on one side,
            // inclusive on the other, so a shared vertex counts once.
            if (vi.lon > point.lon) != (vj.lon > point.lon) {
                let crossing =
                    (vj.lat - vi.lat) * (point.lon - vi.lon) / (vj.lon - vi.lon) + vi.lat;
                if point.lat < crossing {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Convert to a `geo` polygon (lon as x, lat as y) for interop
    pub fn to_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .0
            .iter()
            .map(|p| Coord { x: p.lon, y: p.lat })
            .collect();
        Polygon::new(LineString::new(coords), vec![])
    }

    /// Bounding box as (min_lon, min_lat, max_lon, max_lat)
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        self.to_polygon()
            .bounding_rect()
            .map(|rect| (rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }

    /// Centroid of the ring, used to focus the map on an area
    pub fn centroid(&self) -> Option<GeoPoint> {
        self.to_polygon()
            .centroid()
            .map(|p| GeoPoint::new(p.y(), p.x()))
    }
}
