//! Scanner observation types.

use serde::{Deserialize, Serialize};

use super::cloud::BeaconCloud;

/// One scanner's observations: its identity and the beacons it detected,
/// expressed in its own local frame.
///
/// The local cloud is created once by the report parser and stays
/// read-only through assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerReport {
    /// Scanner identity from the report header.
    pub id: usize,
    /// Observed beacon positions in the scanner's local frame.
    pub beacons: BeaconCloud,
}

impl ScannerReport {
    /// Create a new scanner report.
    pub fn new(id: usize, beacons: BeaconCloud) -> Self {
        Self { id, beacons }
    }
}
