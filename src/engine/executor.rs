//! Instrumented execution - invoke one callable and measure its cost
//!
//! The invocation sits inside a scoped fault boundary: a returned `AlgoError`
//! or a panic becomes a `FaultRecord` in the result, never a propagated
//! failure. Timing and memory capture run on every exit path.

use crate::core::error::{ForgeError, Result};
use crate::registry::{AlgoFn, CallArgs};
use serde::Serialize;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Structured error captured from an invoked callable.
#[derive(Debug, Clone, Serialize)]
pub struct FaultRecord {
    /// Error category: the `AlgoError` variant name, "Panic", or one of
    /// the dispatch rejection kinds ("ImportFault", "NotFound").
    pub kind: String,
    pub message: String,
    /// Diagnostic rendering; not part of the stable contract.
    pub trace: String,
}

/// Outcome of one instrumented invocation.
///
/// Exactly one of `output` / `fault` is populated. Not retained by the
/// engine after return.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionRecord {
    pub duration_ms: f64,
    pub memory_delta_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<FaultRecord>,
    pub family_id: Option<String>,
    pub operation: Option<String>,
    pub resolved_callable_name: Option<String>,
}

impl ExecutionRecord {
    /// Record for a dispatch rejected before any callable ran. The executor
    /// never ran, so both cost figures are zero.
    pub fn rejected(kind: &str, message: String) -> Self {
        Self {
            duration_ms: 0.0,
            memory_delta_bytes: 0,
            output: None,
            fault: Some(FaultRecord {
                kind: kind.to_string(),
                trace: message.clone(),
                message,
            }),
            family_id: None,
            operation: None,
            resolved_callable_name: None,
        }
    }
}

/// Current resident set size of this process, in bytes.
///
/// Failure here is a fatal configuration problem of the host platform, not a
/// normal operating condition, so it surfaces as `ForgeError` rather than as
/// a fault record.
fn current_rss() -> Result<u64> {
    memory_stats::memory_stats()
        .map(|stats| stats.physical_mem as u64)
        .ok_or_else(|| ForgeError::MemorySample("platform reported no RSS figure".to_string()))
}

/// Invoke `func` with `args`, measuring wall-clock time and RSS delta.
///
/// Negative memory deltas are clamped to zero: unrelated allocator activity
/// can shrink RSS during the call, and a negative cost figure would be
/// misleading in reported benchmarks.
pub fn execute(func: AlgoFn, args: &CallArgs) -> Result<ExecutionRecord> {
    let start_rss = current_rss()?;
    let start = Instant::now();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| func(args)));

    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    let end_rss = current_rss()?;
    let memory_delta_bytes = end_rss.saturating_sub(start_rss);

    let (output, fault) = match outcome {
        Ok(Ok(value)) => (Some(value), None),
        Ok(Err(err)) => (
            None,
            Some(FaultRecord {
                kind: err.kind().to_string(),
                message: err.to_string(),
                trace: format!("{err:?}"),
            }),
        ),
        Err(payload) => {
            // Deref through the Box: `&payload` would coerce the Box itself
            // to `&dyn Any` and the downcasts below would never hit.
            let message = panic_message(payload.as_ref());
            (
                None,
                Some(FaultRecord {
                    kind: "Panic".to_string(),
                    trace: format!("panicked: {message}"),
                    message,
                }),
            )
        }
    };

    Ok(ExecutionRecord {
        duration_ms,
        memory_delta_bytes,
        output,
        fault,
        family_id: None,
        operation: None,
        resolved_callable_name: None,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
