//! Delta-voting alignment search.
//!
//! Exhaustive search over the 24 axis rotations with a translation vote per
//! rotation:
//!
//! 1. Rotate the candidate cloud by each catalog rotation in turn.
//! 2. Tally the difference `base - rotated` for every point pair.
//! 3. A difference reached by at least `threshold` pairs is the translation
//!    under which that many candidate points land exactly on base points.
//!
//! Under the true rotation every genuinely shared beacon pair votes for the
//! one true translation, while wrong rotations scatter their votes across
//! near-unique differences. The vote counter is a hash map keyed by the
//! difference vector since translations are unbounded by type.

use std::collections::{HashMap, HashSet};

use super::PairAlignment;
use crate::core::types::{BeaconCloud, Point3, Rotation, Transform};

/// Align a candidate cloud against a base cloud.
///
/// Searches the rotation catalog in order and accepts the first rotation
/// whose translation vote reaches `threshold`. Returns the transform
/// mapping candidate points into the base's frame together with the
/// transformed copy of the candidate, or `None` when no rotation
/// qualifies. Failing to align is an expected outcome during assembly,
/// not an error.
///
/// Pure function of its inputs; the cost is bounded by
/// O(24 * |base| * |candidate|).
pub fn align(base: &BeaconCloud, candidate: &BeaconCloud, threshold: usize) -> Option<PairAlignment> {
    // Neither cloud can supply enough coincident points on its own.
    if base.len() < threshold || candidate.len() < threshold {
        return None;
    }

    let base_set: HashSet<Point3> = base.iter().collect();
    let mut votes: HashMap<Point3, usize> = HashMap::new();
    let mut rotated: Vec<Point3> = Vec::with_capacity(candidate.len());

    for rotation in Rotation::catalog() {
        rotated.clear();
        rotated.extend(candidate.iter().map(|p| rotation.apply(p)));

        votes.clear();
        for b in base.iter() {
            for &r in &rotated {
                let count = votes.entry(b - r).or_insert(0);
                *count += 1;
                if *count >= threshold {
                    return Some(accept(&base_set, &rotated, *rotation, b - r));
                }
            }
        }
    }

    None
}

/// Build the alignment result once a translation vote reaches the threshold.
fn accept(
    base_set: &HashSet<Point3>,
    rotated: &[Point3],
    rotation: Rotation,
    translation: Point3,
) -> PairAlignment {
    let transform = Transform::new(rotation, translation);
    let aligned: BeaconCloud = rotated.iter().map(|&r| r + translation).collect();
    let matched = aligned.iter().filter(|p| base_set.contains(p)).count();
    PairAlignment {
        transform,
        aligned,
        matched,
    }
}
