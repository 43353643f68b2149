//! tara-map - Beacon map reconstruction from overlapping scanner reports.
//!
//! Each scanner reports the beacons it detects only in its own frame, with
//! an unknown position and one of 24 unknown axis orientations. This crate
//! recovers one consistent picture: the full set of unique beacon positions
//! and every scanner's position in a common global frame.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Report parsing
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    engine/                          │  ← Orchestration
//! │           (assembler, global map)                   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  algorithms/                        │  ← Core algorithms
//! │              (pairwise matching)                    │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │       (points, rotations, transforms, clouds)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Pipeline
//!
//! 1. [`io::report::parse_report`] turns report text into per-scanner
//!    beacon clouds.
//! 2. [`algorithms::matching::align`] searches the 24 axis rotations and
//!    votes on a translation to relate one scanner's cloud to another.
//! 3. [`engine::assembler::ScanAssembler`] expands breadth-first from an
//!    anchor scanner, placing each reachable scanner exactly once.
//! 4. [`engine::global_map::GlobalMap`] accumulates the deduplicated
//!    beacon set and resolved scanner poses, and reports the unique
//!    beacon count and the largest scanner separation.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Algorithms (depends on core)
// ============================================================================
pub mod algorithms;

// ============================================================================
// Layer 3: Assembly engine (depends on core, algorithms)
// ============================================================================
pub mod engine;

// ============================================================================
// Layer 4: I/O infrastructure (depends on core)
// ============================================================================
pub mod io;

pub mod error;
pub mod utils;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use crate::core::types::{BeaconCloud, Point3, Rotation, ScannerReport, Transform};

// Algorithms - Matching
pub use algorithms::matching::{align, PairAlignment};

// Engine
pub use engine::{AssemblerConfig, GlobalMap, ScanAssembler, ScannerPose};

// I/O
pub use io::report::parse_report;

// Errors and constants
pub use error::{Result, TaraError};
pub use utils::constants::{MAX_SENSOR_RANGE, OVERLAP_THRESHOLD};
