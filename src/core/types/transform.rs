//! Rigid transform between scanner frames.

use serde::{Deserialize, Serialize};

use super::point::Point3;
use super::rotation::Rotation;

/// A rigid transform: rotate, then translate.
///
/// Maps points from one scanner's frame into another. A placed scanner's
/// transform maps its local observations into the global frame, and its
/// translation is the scanner's own global position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    /// Axis rotation applied first.
    pub rotation: Rotation,
    /// Offset added after rotation.
    pub translation: Point3,
}

impl Transform {
    /// The identity transform (identity rotation, zero translation).
    pub const IDENTITY: Transform = Transform {
        rotation: Rotation::IDENTITY,
        translation: Point3::ORIGIN,
    };

    /// Create a transform from a rotation and a translation.
    #[inline]
    pub fn new(rotation: Rotation, translation: Point3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Map a point through this transform.
    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        self.rotation.apply(p) + self.translation
    }

    /// Compose two transforms: `self` applied after `other`.
    ///
    /// `a.compose(&b).apply(p) == a.apply(b.apply(p))`
    ///
    /// Composition is associative, so a scanner placed through a chain of
    /// pairwise alignments gets the same transform regardless of which
    /// path discovered it.
    #[inline]
    pub fn compose(&self, other: &Transform) -> Transform {
        Transform {
            rotation: self.rotation.compose(&other.rotation),
            translation: self.rotation.apply(other.translation) + self.translation,
        }
    }

    /// The inverse transform.
    #[inline]
    pub fn inverse(&self) -> Transform {
        let rotation = self.rotation.inverse();
        Transform {
            rotation,
            translation: -rotation.apply(self.translation),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
