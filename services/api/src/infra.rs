use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

use polibench::benchmark::{BenchmarkEngine, ResponseSet, StatementCatalog, WeightMatrix};
use polibench::config::DatasetConfig;
use polibench::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the scoring engine from configured dataset overrides, falling back
/// to the CSV assets embedded in the library crate.
pub(crate) fn build_engine(dataset: &DatasetConfig) -> Result<BenchmarkEngine, AppError> {
    match (&dataset.statements_path, &dataset.matrix_path) {
        (None, None) => Ok(BenchmarkEngine::with_default_data()?),
        (statements, matrix) => {
            let catalog = match statements {
                Some(path) => {
                    info!(path = %path.display(), "loading statement catalog override");
                    StatementCatalog::from_path(path)?
                }
                None => StatementCatalog::from_reader(
                    polibench::benchmark::DEFAULT_STATEMENTS_CSV.as_bytes(),
                )?,
            };
            let weights = match matrix {
                Some(path) => {
                    info!(path = %path.display(), "loading weight matrix override");
                    WeightMatrix::from_path(path)?
                }
                None => WeightMatrix::from_reader(
                    polibench::benchmark::DEFAULT_MATRIX_CSV.as_bytes(),
                )?,
            };
            Ok(BenchmarkEngine::new(catalog, weights))
        }
    }
}

/// Read a raw responses file: a JSON object mapping statement ids (numeric
/// or numeric-string keys) to 1-5 answers.
pub(crate) fn load_responses(path: &Path) -> Result<ResponseSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let responses: ResponseSet = serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid responses file {}: {err}", path.display()),
        ))
    })?;
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polibench::benchmark::StatementId;
    use std::io::Write;

    #[test]
    fn default_engine_builds_from_embedded_assets() {
        let engine = build_engine(&DatasetConfig::default()).expect("engine builds");
        assert_eq!(engine.statements().len(), 64);
    }

    #[test]
    fn responses_file_accepts_string_keys() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{\"1\": 4, \"2\": 2}}").expect("write");

        let responses = load_responses(file.path()).expect("loads");
        assert_eq!(responses[&StatementId(1)], 4);
        assert_eq!(responses[&StatementId(2)], 2);
    }

    #[test]
    fn malformed_responses_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        let error = load_responses(file.path()).expect_err("must fail");
        assert!(error.to_string().contains("invalid responses file"));
    }
}
