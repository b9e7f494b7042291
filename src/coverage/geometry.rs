//! Building rings from stored and drawn coordinates.
//!
//! The application stores each drawn ring as a `[[lat, lon], ...]` JSON
//! string; this is the one place that format is interpreted. Rings drawn
//! in memory enter through [`ring_from_pairs`] before being encoded.

use thiserror::Error;

use super::Ring;
use crate::models::GeoPoint;

/// Errors raised when building a ring from stored or drawn coordinates
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Stored text is not a JSON list of coordinate pairs
    #[error("malformed coordinate list: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Coordinate pair with a non-finite component
    #[error("non-finite coordinate at index {index}")]
    NonFinite { index: usize },
}

/// Build a ring from raw `[lat, lon]` coordinate pairs.
///
/// Entry point for rings drawn in memory, before they are encoded for
/// storage; pairs with a non-finite component are rejected with the
/// offending index.
pub fn ring_from_pairs(pairs: Vec<[f64; 2]>) -> Result<Ring, GeometryError> {
    for (index, pair) in pairs.iter().enumerate() {
        if !pair[0].is_finite() || !pair[1].is_finite() {
            return Err(GeometryError::NonFinite { index });
        }
    }

    let points = pairs
        .into_iter()
        .map(|[lat, lon]| GeoPoint::new(lat, lon))
        .collect();

    Ok(Ring::new(points))
}

/// Decode a stored `[[lat, lon], ...]` coordinate list into a ring.
///
/// Delegates to [`ring_from_pairs`] once the JSON is decoded. JSON cannot
/// encode non-finite numbers (`NaN`/`Infinity` literals and overflowing
/// floats are refused by the parser), so stored text only ever fails as
/// [`GeometryError::Malformed`]. Vertex count is not checked here: a
/// degenerate ring parses fine and simply contains nothing. Callers that
/// index geometry should check [`Ring::is_degenerate`] first.
pub fn parse_ring(json: &str) -> Result<Ring, GeometryError> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(json)?;
    ring_from_pairs(pairs)
}

/// Encode a ring back into the stored coordinate-list form
pub fn encode_ring(ring: &Ring) -> Result<String, serde_json::Error> {
    let pairs: Vec<[f64; 2]> = ring.points().iter().map(|p| [p.lat, p.lon]).collect();
    serde_json::to_string(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_list() {
        let ring = parse_ring("[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]").unwrap();

        assert_eq!(ring.len(), 4);
        assert!(ring.contains(&GeoPoint::new(5.0, 5.0)));
        assert!(!ring.contains(&GeoPoint::new(15.0, 15.0)));
    }

    #[test]
    fn test_parse_integer_coordinates() {
        let ring = parse_ring("[[0,0],[0,10],[10,10],[10,0]]").unwrap();

        assert_eq!(ring.points()[1], GeoPoint::new(0.0, 10.0));
    }

    #[test]
    fn test_parse_degenerate_ring_is_allowed() {
        let ring = parse_ring("[[1.0, 2.0]]").unwrap();

        assert!(ring.is_degenerate());
        assert!(!ring.contains(&GeoPoint::new(1.0, 2.0)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in [
            "not json",
            "{\"lat\": 1}",
            "[[1.0]]",
            "[[1.0, 2.0, 3.0]]",
            "[[\"a\", \"b\"]]",
        ] {
            assert!(
                matches!(parse_ring(bad), Err(GeometryError::Malformed(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_numbers() {
        // Literals that overflow f64 fail inside the JSON parser
        for bad in [
            "[[1e999, 0.0], [0.0, 1.0], [1.0, 1.0]]",
            "[[0.0, -1e999], [0.0, 1.0], [1.0, 1.0]]",
        ] {
            assert!(
                matches!(parse_ring(bad), Err(GeometryError::Malformed(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_pairs_build_a_ring() {
        let ring =
            ring_from_pairs(vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]).unwrap();

        assert!(ring.contains(&GeoPoint::new(5.0, 5.0)));
    }

    #[test]
    fn test_pairs_with_non_finite_component_rejected() {
        let drawn = vec![[0.0, 0.0], [f64::NAN, 10.0], [10.0, 10.0]];
        assert!(matches!(
            ring_from_pairs(drawn),
            Err(GeometryError::NonFinite { index: 1 })
        ));

        let drawn = vec![[0.0, f64::NEG_INFINITY], [1.0, 1.0], [2.0, 2.0]];
        assert!(matches!(
            ring_from_pairs(drawn),
            Err(GeometryError::NonFinite { index: 0 })
        ));
    }

    #[test]
    fn test_encode_round_trip() {
        let ring = Ring::new(vec![
            GeoPoint::new(-23.55, -46.63),
            GeoPoint::new(-23.55, -46.62),
            GeoPoint::new(-23.54, -46.62),
        ]);

        let encoded = encode_ring(&ring).unwrap();
        assert_eq!(parse_ring(&encoded).unwrap(), ring);
    }
}
