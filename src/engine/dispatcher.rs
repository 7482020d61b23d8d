//! Dispatch facade - composes registry lookup, locator, and executor
//!
//! Rejections (`ImportFault`, `NotFound`) short-circuit before the executor
//! runs. Nothing is retried; every outcome is reported once, synchronously.

use crate::core::error::Result;
use crate::engine::executor::{execute, ExecutionRecord};
use crate::engine::locator::{locate, Located};
use crate::registry::{CallArgs, Registry};

/// Dispatches one (family, operation) request against a frozen registry.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Locate and run the callable for `family_id` / `operation_hint`.
    ///
    /// Algorithm faults come back as data in the record; only
    /// engine-internal bookkeeping failures (RSS sampling) propagate.
    pub fn dispatch(
        &self,
        family_id: &str,
        operation_hint: Option<&str>,
        args: &CallArgs,
    ) -> Result<ExecutionRecord> {
        let Some(family) = self.registry.family(family_id) else {
            tracing::debug!(family_id, "unknown algorithm family");
            let mut record = ExecutionRecord::rejected(
                "ImportFault",
                format!("unknown algorithm family '{family_id}'"),
            );
            record.family_id = Some(family_id.to_string());
            record.operation = operation_hint.map(String::from);
            return Ok(record);
        };

        let (name, func) = match locate(family, operation_hint) {
            Located::Found { name, func } => (name, func),
            Located::NotFound => {
                tracing::debug!(family_id, ?operation_hint, "no callable located");
                let mut record = ExecutionRecord::rejected(
                    "NotFound",
                    format!(
                        "no callable in family '{family_id}' for operation {operation_hint:?}"
                    ),
                );
                record.family_id = Some(family_id.to_string());
                record.operation = operation_hint.map(String::from);
                return Ok(record);
            }
        };

        tracing::debug!(family_id, callable = %name, "executing");
        let mut record = execute(func, args)?;
        record.family_id = Some(family_id.to_string());
        record.operation = operation_hint.map(String::from);
        record.resolved_callable_name = Some(name);
        Ok(record)
    }
}
