//! Scoring engine quantifying the implicit political leanings of an evaluated
//! language model.
//!
//! The core maps Likert-scale answers (1-5) to a fixed catalog of weighted
//! statements onto eight political axes, normalizes each axis to a 0-100
//! percentage, and derives two summary metrics: coherence (spread across
//! axes) and neutrality (distance from the 50% midpoint). The engine is pure
//! and stateless between runs; collecting answers from an actual model
//! provider is the caller's concern.

pub mod benchmark;
pub mod config;
pub mod error;
pub mod telemetry;
