use tracing::info;

use super::axes::Axis;
use super::catalog::{
    CatalogError, StatementCatalog, WeightMatrix, DEFAULT_MATRIX_CSV, DEFAULT_STATEMENTS_CSV,
};
use super::domain::{AxisScores, BenchmarkResult, Metrics, ResponseSet, Statement};
use super::metrics::metrics;
use super::scoring::score;
use super::validate::{validate, ValidationError};

/// Failure modes of a scoring run.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    /// Client-data problem: the response set does not match the catalog.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Internal-consistency defect: the scorer produced fewer than eight
    /// axis scores. Indicates a catalog/matrix loading bug, not bad input.
    #[error("incomplete score set: expected {expected} axis scores, got {actual}")]
    IncompleteScoreSet { expected: usize, actual: usize },
}

/// Stateless scoring engine holding the immutable catalog and weight matrix.
///
/// Explicitly constructed configuration rather than process-global state, so
/// engines with different catalogs can coexist and be tested in isolation.
/// Runs are independent pure computations; the engine can be shared across
/// threads without locking.
pub struct BenchmarkEngine {
    catalog: StatementCatalog,
    matrix: WeightMatrix,
}

impl BenchmarkEngine {
    /// Build an engine, aligning the matrix with the catalog (missing weight
    /// rows become explicit neutral rows).
    pub fn new(catalog: StatementCatalog, matrix: WeightMatrix) -> Self {
        let matrix = matrix.aligned_with(&catalog);
        info!(
            statements = catalog.len(),
            "benchmark engine initialized"
        );
        Self { catalog, matrix }
    }

    /// Engine backed by the embedded 64-statement default dataset.
    pub fn with_default_data() -> Result<Self, CatalogError> {
        let catalog = StatementCatalog::from_reader(DEFAULT_STATEMENTS_CSV.as_bytes())?;
        let matrix = WeightMatrix::from_reader(DEFAULT_MATRIX_CSV.as_bytes())?;
        Ok(Self::new(catalog, matrix))
    }

    /// Read-only snapshot of the loaded statements.
    pub fn statements(&self) -> &[Statement] {
        self.catalog.statements()
    }

    pub fn catalog(&self) -> &StatementCatalog {
        &self.catalog
    }

    /// Check a response set against the catalog without scoring it.
    pub fn validate(&self, responses: &ResponseSet) -> Result<(), ValidationError> {
        validate(responses, &self.catalog)
    }

    /// Single entry point: validate, score, derive metrics, and assemble the
    /// immutable result record. A partially invalid response set never
    /// produces a result.
    pub fn run(
        &self,
        responses: ResponseSet,
        model_name: &str,
    ) -> Result<BenchmarkResult, BenchmarkError> {
        self.validate(&responses)?;
        let scores = score(&responses, &self.matrix);
        let summary = metrics(&scores);
        assemble(model_name, scores, summary, responses)
    }
}

/// Pure construction of the result record. Validation already happened
/// upstream; the only failure is a structurally incomplete score set.
pub fn assemble(
    model_name: &str,
    scores: AxisScores,
    metrics: Metrics,
    raw_responses: ResponseSet,
) -> Result<BenchmarkResult, BenchmarkError> {
    if scores.len() != Axis::COUNT {
        return Err(BenchmarkError::IncompleteScoreSet {
            expected: Axis::COUNT,
            actual: scores.len(),
        });
    }

    Ok(BenchmarkResult {
        model_name: model_name.to_string(),
        scores,
        metrics,
        raw_responses,
    })
}
