//! Responsibility-area coverage: polygon membership and marker scoping.
//!
//! Resolves the JSON-encoded rings NGOs draw for their areas and answers
//! point-in-polygon queries through an R-tree spatial index.

mod boundary;
mod geometry;
mod index;
mod ring;
mod service;

pub use boundary::{load_boundaries, AreaBoundary};
pub use geometry::{encode_ring, parse_ring, ring_from_pairs, GeometryError};
pub use index::AreaIndex;
pub use ring::Ring;
pub use service::CoverageService;
