//! HTTP benchmark adapter
//!
//! Thin transport layer in front of the engine: decodes the request, runs
//! resolve -> dispatch, and serializes the records back. No engine logic
//! lives here.

use crate::catalog::Catalog;
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::engine::{Dispatcher, ExecutionRecord, Resolution, Resolver};
use crate::registry::{CallArgs, Registry};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared, immutable engine state. Requests never mutate it, so handlers
/// need no locking.
pub struct AppState {
    pub catalog: Catalog,
    pub registry: Registry,
    pub config: EngineConfig,
}

impl AppState {
    pub fn standard(config: EngineConfig) -> Self {
        Self {
            catalog: Catalog::standard(),
            registry: Registry::standard(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BenchmarkRequest {
    pub raw_input: String,
    /// Explicit family override; skips the resolver's family choice.
    pub family: Option<String>,
    /// Explicit operation override.
    pub operation: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BenchmarkResponse {
    pub parsed: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<ExecutionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/families", get(list_families))
        .route("/api/benchmark", post(run_benchmark))
        .with_state(state)
}

/// Bind and serve until the task is aborted.
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let app = router(state);
    info!("AlgoForge listening on {addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "AlgoForge backend running!",
    }))
}

/// Dispatchable family ids, sorted for a stable response.
async fn list_families(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let mut families: Vec<&str> = state.registry.family_ids().collect();
    families.sort_unstable();
    Json(serde_json::json!({ "families": families }))
}

async fn run_benchmark(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BenchmarkRequest>,
) -> Json<BenchmarkResponse> {
    let resolver = Resolver::new(&state.catalog, &state.config);
    let mut parsed = resolver.resolve(&request.raw_input);

    // Explicit overrides win over resolution.
    if request.family.is_some() {
        parsed.family_id = request.family.clone();
    }
    if request.operation.is_some() {
        parsed.operation = request.operation.clone();
    }

    let Some(family_id) = parsed.family_id.clone() else {
        return Json(BenchmarkResponse {
            parsed,
            benchmark: None,
            error: Some("could not detect an algorithm family from input".to_string()),
        });
    };

    let dispatcher = Dispatcher::new(&state.registry);
    match dispatcher.dispatch(&family_id, parsed.operation.as_deref(), &CallArgs::none()) {
        Ok(record) => Json(BenchmarkResponse {
            parsed,
            benchmark: Some(record),
            error: None,
        }),
        Err(e) => {
            tracing::error!("engine failure: {e}");
            Json(BenchmarkResponse {
                parsed,
                benchmark: None,
                error: Some(e.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_state_builds() {
        let state = AppState::standard(EngineConfig::default());
        assert!(state.registry.family("sorting").is_some());
        assert!(state.config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_families_listing_is_sorted_and_complete() {
        let state = Arc::new(AppState::standard(EngineConfig::default()));
        let Json(response) = list_families(State(state)).await;
        let families = response["families"].as_array().unwrap();
        assert_eq!(families.len(), 10);
        assert_eq!(families.first(), Some(&serde_json::json!("arrays")));
        assert!(families.contains(&serde_json::json!("sorting")));
    }

    #[tokio::test]
    async fn test_benchmark_handler_end_to_end() {
        let state = Arc::new(AppState::standard(EngineConfig::default()));
        let request = BenchmarkRequest {
            raw_input: "Sort 1000 numbers fast".to_string(),
            family: None,
            operation: None,
        };
        let Json(response) = run_benchmark(State(state), Json(request)).await;
        assert_eq!(response.parsed.family_id.as_deref(), Some("sorting"));
        let record = response.benchmark.unwrap();
        assert!(record.fault.is_none());
        assert!(record.output.is_some());
    }

    #[tokio::test]
    async fn test_benchmark_handler_unresolved_input() {
        let state = Arc::new(AppState::standard(EngineConfig::default()));
        let request = BenchmarkRequest {
            raw_input: "???".to_string(),
            family: None,
            operation: None,
        };
        let Json(response) = run_benchmark(State(state), Json(request)).await;
        assert!(response.parsed.family_id.is_none());
        assert!(response.benchmark.is_none());
        assert!(response.error.is_some());
    }

    #[tokio::test]
    async fn test_family_override_wins() {
        let state = Arc::new(AppState::standard(EngineConfig::default()));
        let request = BenchmarkRequest {
            raw_input: "sort this".to_string(),
            family: Some("graphs".to_string()),
            operation: None,
        };
        let Json(response) = run_benchmark(State(state), Json(request)).await;
        let record = response.benchmark.unwrap();
        assert_eq!(record.family_id.as_deref(), Some("graphs"));
    }
}
