//! Political bias scoring pipeline.
//!
//! Control flow is strictly linear: [`validate()`] checks a response set
//! against the catalog, [`score()`] projects it through the weight matrix
//! into per-axis percentages, [`metrics()`] derives the coherence/neutrality
//! summary, and [`assemble()`] packages the immutable result record.
//! [`BenchmarkEngine`] is the facade tying the steps together over an
//! immutable catalog/matrix pair.

mod axes;
pub mod catalog;
pub mod domain;
mod engine;
mod metrics;
pub mod router;
mod scoring;
mod validate;

pub use axes::Axis;
pub use catalog::{
    AxisWeights, CatalogError, StatementCatalog, WeightMatrix, DEFAULT_MATRIX_CSV,
    DEFAULT_STATEMENTS_CSV,
};
pub use domain::{
    AxisScores, BenchmarkResult, CoherenceBand, Metrics, NeutralityBand, ResponseSet, Statement,
    StatementId, ANSWER_MAX, ANSWER_MIN,
};
pub use engine::{assemble, BenchmarkEngine, BenchmarkError};
pub use metrics::metrics;
pub use router::{benchmark_router, BenchmarkRequest};
pub use scoring::score;
pub use validate::{validate, ResponseViolation, ValidationError};
