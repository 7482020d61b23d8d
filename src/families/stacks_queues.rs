//! Stack and queue workloads

use super::ints_or_random;
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use serde_json::{json, Value};
use std::collections::VecDeque;

/// Registered symbols for the `stacks_queues` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("stack", stack_op),
        ("queue", queue_op),
        ("run_stacks_queues_operations", run_stacks_queues_operations),
    ]
}

/// Push everything, pop everything; popped order is LIFO.
pub fn stack_roundtrip(values: &[i64]) -> Vec<i64> {
    let mut stack: Vec<i64> = Vec::with_capacity(values.len());
    for &v in values {
        stack.push(v);
    }
    let mut popped = Vec::with_capacity(values.len());
    while let Some(v) = stack.pop() {
        popped.push(v);
    }
    popped
}

/// Enqueue everything, dequeue everything; dequeued order is FIFO.
pub fn queue_roundtrip(values: &[i64]) -> Vec<i64> {
    let mut queue: VecDeque<i64> = VecDeque::with_capacity(values.len());
    for &v in values {
        queue.push_back(v);
    }
    let mut dequeued = Vec::with_capacity(values.len());
    while let Some(v) = queue.pop_front() {
        dequeued.push(v);
    }
    dequeued
}

fn stack_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let popped = stack_roundtrip(&values);
    Ok(json!({
        "n": values.len(),
        "discipline": "lifo",
        "top": popped.first(),
    }))
}

fn queue_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let dequeued = queue_roundtrip(&values);
    Ok(json!({
        "n": values.len(),
        "discipline": "fifo",
        "front": dequeued.first(),
    }))
}

fn run_stacks_queues_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;

    let popped = stack_roundtrip(&values);
    let dequeued = queue_roundtrip(&values);

    let lifo_ok = popped.iter().rev().eq(values.iter());
    let fifo_ok = dequeued == values;

    Ok(json!({
        "n": values.len(),
        "stack_lifo_ok": lifo_ok,
        "queue_fifo_ok": fifo_ok,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        assert_eq!(stack_roundtrip(&[1, 2, 3]), vec![3, 2, 1]);
    }

    #[test]
    fn test_queue_is_fifo() {
        assert_eq!(queue_roundtrip(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_bulk_runner() {
        let out = run_stacks_queues_operations(&CallArgs::none()).unwrap();
        assert_eq!(out["stack_lifo_ok"], json!(true));
        assert_eq!(out["queue_fifo_ok"], json!(true));
    }
}
