//! Accumulated global beacon map.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::types::{BeaconCloud, Point3, Transform};

/// A placed scanner: its identity and resolved global transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerPose {
    /// Scanner identity from the report.
    pub id: usize,
    /// Transform mapping the scanner's local frame into the global frame.
    pub transform: Transform,
}

impl ScannerPose {
    /// Create a new scanner pose.
    pub fn new(id: usize, transform: Transform) -> Self {
        Self { id, transform }
    }

    /// The scanner's position in the global frame.
    #[inline]
    pub fn position(&self) -> Point3 {
        self.transform.translation
    }
}

/// The assembled output: deduplicated global beacon positions plus every
/// placed scanner's resolved pose.
///
/// Grows monotonically as scanners are placed; the same beacon reported
/// by two scanners collapses to one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalMap {
    beacons: HashSet<Point3>,
    scanners: Vec<ScannerPose>,
}

impl GlobalMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placed scanner and merge its globally-transformed beacons.
    pub fn place_scanner(&mut self, pose: ScannerPose, beacons: &BeaconCloud) {
        self.scanners.push(pose);
        self.beacons.extend(beacons.iter());
    }

    /// Number of unique beacons in the global frame.
    #[inline]
    pub fn beacon_count(&self) -> usize {
        self.beacons.len()
    }

    /// Check whether a global position holds a beacon.
    #[inline]
    pub fn contains_beacon(&self, p: &Point3) -> bool {
        self.beacons.contains(p)
    }

    /// Iterate over the unique global beacon positions.
    pub fn beacons(&self) -> impl Iterator<Item = Point3> + '_ {
        self.beacons.iter().copied()
    }

    /// The placed scanners, in placement order.
    #[inline]
    pub fn scanners(&self) -> &[ScannerPose] {
        &self.scanners
    }

    /// Number of placed scanners.
    #[inline]
    pub fn scanner_count(&self) -> usize {
        self.scanners.len()
    }

    /// Look up a scanner's resolved pose by identity.
    pub fn scanner_pose(&self, id: usize) -> Option<ScannerPose> {
        self.scanners.iter().find(|s| s.id == id).copied()
    }

    /// Largest Manhattan distance between any two scanner positions.
    ///
    /// Zero when fewer than two scanners are placed.
    pub fn max_scanner_distance(&self) -> i64 {
        let mut max = 0;
        for (i, a) in self.scanners.iter().enumerate() {
            for b in &self.scanners[i + 1..] {
                max = max.max(a.position().manhattan(&b.position()));
            }
        }
        max
    }
}
