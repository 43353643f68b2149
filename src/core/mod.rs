//! Core foundation layer.
//!
//! Bottom layer of the crate with no internal dependencies. All other
//! layers depend on core.
//!
//! # Contents
//!
//! - [`types`]: points, rotations, transforms, and beacon clouds

pub mod types;
