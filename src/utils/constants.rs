//! Domain constants for scanner report processing.

/// Minimum number of coincident beacons required to accept a pairwise
/// alignment.
///
/// Twelve common beacons pin down the relative rotation and translation
/// of two scanners. The bar is a policy choice, not a proof: it is set
/// high enough that an accidental twelve-fold vote under a wrong rotation
/// is astronomically unlikely for beacons spread over the sensing cube.
pub const OVERLAP_THRESHOLD: usize = 12;

/// Half-width of a scanner's cubic detection volume along every axis.
///
/// Characterizes the density of the input data. The alignment search does
/// not consult it.
pub const MAX_SENSOR_RANGE: i32 = 1000;
