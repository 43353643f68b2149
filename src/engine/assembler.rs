//! Incremental scan graph assembly.
//!
//! Places every scanner into one common frame by breadth-first expansion:
//! the first scanner is fixed at the origin as the anchor, and each placed
//! scanner's globally-expressed beacons become a base against which the
//! still-unplaced scanners are tried. A scanner reachable from the anchor
//! through any chain of sufficient pairwise overlaps is eventually placed;
//! one that is not makes the whole assembly fail.

use std::collections::VecDeque;

use crate::algorithms::matching::align;
use crate::core::types::{BeaconCloud, ScannerReport, Transform};
use crate::error::{Result, TaraError};
use crate::utils::constants::OVERLAP_THRESHOLD;

use super::global_map::{GlobalMap, ScannerPose};

/// Configuration for scan graph assembly.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Minimum coincident beacons to accept a pairwise alignment.
    pub overlap_threshold: usize,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: OVERLAP_THRESHOLD,
        }
    }
}

/// Assembles scanner reports into a single global beacon map.
#[derive(Debug, Clone, Default)]
pub struct ScanAssembler {
    config: AssemblerConfig,
}

impl ScanAssembler {
    /// Create a new assembler with the given configuration.
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Place every scanner and merge all observations into a global map.
    ///
    /// The first report is the anchor and receives the identity transform;
    /// every other scanner's transform is resolved through whichever chain
    /// of pairwise alignments reaches it first and is never revised.
    ///
    /// Fails with [`TaraError::DisconnectedGraph`] when some scanners
    /// cannot be reached from the anchor; no partial map is returned in
    /// that case, since the downstream statistics assume full coverage.
    pub fn assemble(&self, reports: Vec<ScannerReport>) -> Result<GlobalMap> {
        let total = reports.len();
        let mut map = GlobalMap::new();

        let mut iter = reports.into_iter();
        let anchor = match iter.next() {
            Some(report) => report,
            None => return Ok(map),
        };
        let mut pending: Vec<ScannerReport> = iter.collect();

        log::info!(
            "assembling {} scanners, anchor is scanner {}",
            total,
            anchor.id
        );
        map.place_scanner(
            ScannerPose::new(anchor.id, Transform::IDENTITY),
            &anchor.beacons,
        );

        // Placed scanners not yet tried against the pending set, each with
        // its beacons already expressed in the global frame. Popped entries
        // are done: their clouds are never needed again.
        let mut frontier: VecDeque<(usize, BeaconCloud)> = VecDeque::new();
        frontier.push_back((anchor.id, anchor.beacons));

        while let Some((base_id, base_cloud)) = frontier.pop_front() {
            let mut still_pending = Vec::with_capacity(pending.len());
            for report in pending {
                match align(&base_cloud, &report.beacons, self.config.overlap_threshold) {
                    Some(result) => {
                        // Base points are global, so the pairwise transform
                        // already maps this scanner's local frame to global.
                        log::info!(
                            "placed scanner {} against scanner {} at {} ({} coincident beacons)",
                            report.id,
                            base_id,
                            result.transform.translation,
                            result.matched
                        );
                        map.place_scanner(
                            ScannerPose::new(report.id, result.transform),
                            &result.aligned,
                        );
                        frontier.push_back((report.id, result.aligned));
                    }
                    None => still_pending.push(report),
                }
            }
            pending = still_pending;
            log::debug!(
                "scanner {} exhausted, {} scanners still pending",
                base_id,
                pending.len()
            );
        }

        if !pending.is_empty() {
            return Err(TaraError::DisconnectedGraph {
                placed: total - pending.len(),
                total,
            });
        }

        log::info!(
            "assembly complete: {} unique beacons from {} scanners",
            map.beacon_count(),
            map.scanner_count()
        );
        Ok(map)
    }
}
