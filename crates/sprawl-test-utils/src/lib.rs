//! Test fixtures and statistics helpers for Sprawl development.
//!
//! Shared by the integration tests and the benchmarks: seeded engine
//! construction, deterministic target sequences, adjacency reachability
//! over occupied cells, and a chi-square goodness-of-fit check.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod stats;

pub use fixtures::{occupied_coords, random_targets, reachable_from, seeded_engine};
pub use stats::{chi_square_uniform, CHI_SQUARE_999};
