use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ResponseSet;
use super::engine::{BenchmarkEngine, BenchmarkError};

/// Body of a benchmark submission: the evaluated model's name plus one
/// answer per catalog statement. JSON object keys may be numeric strings.
#[derive(Debug, Deserialize)]
pub struct BenchmarkRequest {
    pub model_name: String,
    pub responses: ResponseSet,
}

/// Router builder exposing the scoring endpoints.
pub fn benchmark_router(engine: Arc<BenchmarkEngine>) -> Router {
    Router::new()
        .route("/api/v1/statements", get(statements_handler))
        .route("/api/v1/benchmark", post(benchmark_handler))
        .with_state(engine)
}

pub(crate) async fn statements_handler(State(engine): State<Arc<BenchmarkEngine>>) -> Response {
    (StatusCode::OK, Json(engine.statements().to_vec())).into_response()
}

pub(crate) async fn benchmark_handler(
    State(engine): State<Arc<BenchmarkEngine>>,
    Json(request): Json<BenchmarkRequest>,
) -> Response {
    match engine.run(request.responses, &request.model_name) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(BenchmarkError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "violations": error.violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        // Non-validation failures indicate a dataset defect, not bad input.
        Err(other) => crate::error::AppError::from(other).into_response(),
    }
}
