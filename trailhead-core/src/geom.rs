//! Coordinate reference systems and the reprojection seam.
//!
//! Feed output is always WGS84 (EPSG:4326) while stored geometries may use
//! a projected system. The actual transform mathematics belong to the GIS
//! layer; [`CoordTransformer`] is the seam the feed generators call
//! through. [`IdentityTransformer`] covers deployments whose geometries
//! are already stored in WGS84.

use std::fmt;

use geo::{Coord, LineString, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A spatial reference system identifier (EPSG code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Srid(pub u32);

/// WGS84 (EPSG:4326), the reference system of every feed.
pub const WGS84: Srid = Srid(4326);

impl fmt::Display for Srid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// Errors raised by coordinate transforms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The transformer has no path from the source system to WGS84.
    #[error("no transform available from {from} to {to}")]
    UnsupportedSrid {
        /// Reference system of the input geometry.
        from: Srid,
        /// Requested output reference system.
        to: Srid,
    },
}

/// Reprojects coordinates into WGS84.
///
/// Axis order is `x = longitude`, `y = latitude` on both sides.
pub trait CoordTransformer {
    /// Transform a single coordinate from `from` into WGS84.
    fn transform(&self, coord: Coord<f64>, from: Srid) -> Result<Coord<f64>, TransformError>;

    /// Transform a point geometry into WGS84.
    fn transform_point(&self, point: Point<f64>, from: Srid) -> Result<Point<f64>, TransformError> {
        self.transform(point.0, from).map(Point::from)
    }

    /// Transform a polyline into WGS84, preserving vertex order.
    fn transform_line(
        &self,
        line: &LineString<f64>,
        from: Srid,
    ) -> Result<LineString<f64>, TransformError> {
        let coords: Vec<Coord<f64>> = line
            .coords()
            .map(|coord| self.transform(*coord, from))
            .collect::<Result<_, _>>()?;
        Ok(LineString::new(coords))
    }
}

/// Pass-through transformer for data already stored in WGS84.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransformer;

impl CoordTransformer for IdentityTransformer {
    fn transform(&self, coord: Coord<f64>, from: Srid) -> Result<Coord<f64>, TransformError> {
        if from == WGS84 {
            Ok(coord)
        } else {
            Err(TransformError::UnsupportedSrid { from, to: WGS84 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_passes_wgs84_through() {
        let coord = Coord { x: 2.0, y: 48.0 };
        let out = IdentityTransformer
            .transform(coord, WGS84)
            .expect("WGS84 input");
        assert_eq!(out, coord);
    }

    #[rstest]
    fn identity_rejects_projected_input() {
        let err = IdentityTransformer
            .transform(Coord { x: 0.0, y: 0.0 }, Srid(2154))
            .expect_err("projected input");
        assert_eq!(
            err,
            TransformError::UnsupportedSrid {
                from: Srid(2154),
                to: WGS84
            }
        );
    }

    #[rstest]
    fn line_transform_preserves_vertex_order() {
        let line = LineString::from(vec![(2.0, 48.0), (3.0, 49.0)]);
        let out = IdentityTransformer
            .transform_line(&line, WGS84)
            .expect("WGS84 input");
        assert_eq!(out, line);
    }
}
