//! Pairwise scanner alignment.
//!
//! Decides whether two scanners observed the same physical region and, if
//! so, computes the rigid transform relating their frames.

mod delta_vote;

pub use delta_vote::align;

use crate::core::types::{BeaconCloud, Transform};

/// Result of a successful pairwise alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairAlignment {
    /// Transform mapping the candidate's frame into the base's frame.
    pub transform: Transform,

    /// The candidate cloud mapped into the base's frame.
    pub aligned: BeaconCloud,

    /// Number of candidate points coinciding with base points.
    ///
    /// At least the acceptance threshold, usually larger when the two
    /// scanners share more than the minimum overlap.
    pub matched: usize,
}
