//! Beacon point cloud type.

use serde::{Deserialize, Serialize};

use super::point::Point3;
use super::transform::Transform;

/// An ordered collection of beacon positions in one frame.
///
/// A scanner's local cloud is created once by the report parser and never
/// mutated afterward; alignment and assembly only produce transformed
/// copies. Order is irrelevant to alignment but preserved so clouds
/// compare deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconCloud {
    points: Vec<Point3>,
}

impl BeaconCloud {
    /// Create an empty cloud.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a cloud with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a cloud from a vector of points.
    pub fn from_points(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Add a point.
    #[inline]
    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over points.
    pub fn iter(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().copied()
    }

    /// The points as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point3] {
        &self.points
    }

    /// Map every point through a transform, producing a new cloud.
    ///
    /// Point order is preserved.
    pub fn transform(&self, transform: &Transform) -> BeaconCloud {
        Self {
            points: self.points.iter().map(|&p| transform.apply(p)).collect(),
        }
    }
}

impl FromIterator<Point3> for BeaconCloud {
    fn from_iter<T: IntoIterator<Item = Point3>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
