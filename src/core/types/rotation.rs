//! The 24 axis-aligned rotations of 3D integer space.
//!
//! A scanner's orientation is unknown but restricted to the proper rotation
//! group of the cube: each axis of its frame maps onto one of ours, possibly
//! flipped, with handedness preserved. That leaves 6 axis permutations times
//! 8 sign patterns, half of which mirror the space, so 24 rotations remain.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::point::Point3;

/// Axis permutations in enumeration order.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

static CATALOG: OnceLock<Vec<Rotation>> = OnceLock::new();

/// One of the 24 handedness-preserving axis rotations.
///
/// Applying a rotation permutes the coordinates of a point and flips the
/// signs of some of them: `out[i] = sign[i] * p[perm[i]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    perm: [usize; 3],
    sign: [i32; 3],
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Rotation = Rotation {
        perm: [0, 1, 2],
        sign: [1, 1, 1],
    };

    /// The full catalog of 24 rotations, in a fixed enumeration order.
    ///
    /// Generated once on first use and cached. The order is deterministic
    /// so searches over the catalog are reproducible; the identity is the
    /// first entry.
    pub fn catalog() -> &'static [Rotation] {
        CATALOG.get_or_init(|| {
            let mut rotations = Vec::with_capacity(24);
            for perm in PERMUTATIONS {
                for bits in 0..8u8 {
                    let sign = [
                        if bits & 1 == 0 { 1 } else { -1 },
                        if bits >> 1 & 1 == 0 { 1 } else { -1 },
                        if bits >> 2 & 1 == 0 { 1 } else { -1 },
                    ];
                    let rotation = Rotation { perm, sign };
                    if rotation.determinant() == 1 {
                        rotations.push(rotation);
                    }
                }
            }
            rotations
        })
    }

    /// Rotate a point.
    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        Point3::new(
            self.sign[0] * p.axis(self.perm[0]),
            self.sign[1] * p.axis(self.perm[1]),
            self.sign[2] * p.axis(self.perm[2]),
        )
    }

    /// Compose two rotations: `self` applied after `other`.
    ///
    /// `a.compose(&b).apply(p) == a.apply(b.apply(p))`
    #[inline]
    pub fn compose(&self, other: &Rotation) -> Rotation {
        let mut perm = [0usize; 3];
        let mut sign = [0i32; 3];
        for i in 0..3 {
            perm[i] = other.perm[self.perm[i]];
            sign[i] = self.sign[i] * other.sign[self.perm[i]];
        }
        Rotation { perm, sign }
    }

    /// The inverse rotation.
    #[inline]
    pub fn inverse(&self) -> Rotation {
        let mut perm = [0usize; 3];
        let mut sign = [0i32; 3];
        for i in 0..3 {
            perm[self.perm[i]] = i;
            sign[self.perm[i]] = self.sign[i];
        }
        Rotation { perm, sign }
    }

    /// Determinant of the rotation matrix: +1 for proper rotations,
    /// -1 for reflections.
    pub fn determinant(&self) -> i32 {
        self.permutation_parity() * self.sign[0] * self.sign[1] * self.sign[2]
    }

    /// Parity of the axis permutation: +1 for even, -1 for odd.
    fn permutation_parity(&self) -> i32 {
        let mut inversions = 0;
        for i in 0..3 {
            for j in (i + 1)..3 {
                if self.perm[i] > self.perm[j] {
                    inversions += 1;
                }
            }
        }
        if inversions % 2 == 0 {
            1
        } else {
            -1
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_24_unique_proper_rotations() {
        let catalog = Rotation::catalog();
        assert_eq!(catalog.len(), 24);

        let unique: HashSet<_> = catalog.iter().map(|r| (r.perm, r.sign)).collect();
        assert_eq!(unique.len(), 24);

        for rotation in catalog {
            assert_eq!(rotation.determinant(), 1);
        }
    }

    #[test]
    fn test_catalog_starts_with_identity() {
        assert_eq!(Rotation::catalog()[0], Rotation::IDENTITY);
    }

    #[test]
    fn test_identity_apply() {
        let p = Point3::new(4, -5, 6);
        assert_eq!(Rotation::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_apply_permutes_and_flips() {
        let rotation = Rotation {
            perm: [1, 2, 0],
            sign: [-1, 1, -1],
        };
        assert_eq!(rotation.determinant(), 1);
        let p = Point3::new(1, 2, 3);
        assert_eq!(rotation.apply(p), Point3::new(-2, 3, -1));
    }

    #[test]
    fn test_compose_matches_sequential_apply() {
        let p = Point3::new(7, -33, -71);
        for a in Rotation::catalog() {
            for b in Rotation::catalog() {
                assert_eq!(a.compose(b).apply(p), a.apply(b.apply(p)));
            }
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        let p = Point3::new(553, 345, -567);
        for rotation in Rotation::catalog() {
            let inverse = rotation.inverse();
            assert_eq!(inverse.apply(rotation.apply(p)), p);
            assert_eq!(rotation.compose(&inverse), Rotation::IDENTITY);
            assert_eq!(inverse.compose(rotation), Rotation::IDENTITY);
        }
    }

    #[test]
    fn test_group_closure() {
        let catalog: HashSet<_> = Rotation::catalog()
            .iter()
            .map(|r| (r.perm, r.sign))
            .collect();
        for a in Rotation::catalog() {
            for b in Rotation::catalog() {
                let c = a.compose(b);
                assert!(catalog.contains(&(c.perm, c.sign)));
            }
        }
    }

    #[test]
    fn test_distinct_images_of_asymmetric_point() {
        // An asymmetric point has 24 distinct images, one per rotation.
        let p = Point3::new(1, 2, 3);
        let images: HashSet<_> = Rotation::catalog().iter().map(|r| r.apply(p)).collect();
        assert_eq!(images.len(), 24);
    }
}
