//! Rule-based road growth for the Sprawl automaton.
//!
//! [`GrowthEngine`] owns a [`Lattice`](sprawl_lattice::Lattice), a seeded
//! [`GrowthRng`], and the fixed 13-entry rule table. Each
//! [`update`](GrowthEngine::update) reads one cell; if it is occupied, a
//! window is copied out around it, the rule for its type claims neighbours
//! with claim-if-empty writes, and the window is pasted back.
//!
//! Growth is monotonic (an occupied cell never changes) and deterministic
//! (same seed and same target sequence give a byte-identical lattice).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;
pub mod rng;
pub mod rules;
pub mod schedule;

pub use config::{ConfigError, EngineConfig};
pub use engine::{GrowthEngine, UpdateOutcome};
pub use metrics::GrowthMetrics;
pub use rng::GrowthRng;
pub use rules::{rule_for, RuleContext, RuleFn};
pub use schedule::{plan_disjoint_batches, windows_overlap};
