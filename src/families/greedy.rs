//! Greedy algorithms

use super::{workload_rng, workload_size};
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use rand::Rng;
use serde_json::{json, Value};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Registered symbols for the `greedy` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("activity_selection", activity_selection_op),
        ("fractional_knapsack", fractional_knapsack_op),
        ("huffman", huffman_op),
        ("run_greedy_operations", run_greedy_operations),
    ]
}

/// Maximum number of non-overlapping `(start, end)` intervals.
pub fn activity_selection(intervals: &[(u64, u64)]) -> usize {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|&(_, end)| end);
    let mut count = 0;
    let mut last_end = 0u64;
    for &(start, end) in &sorted {
        if start >= last_end {
            count += 1;
            last_end = end;
        }
    }
    count
}

/// Fractional knapsack: maximum value achievable within `capacity`, items
/// given as `(value, weight)`.
pub fn fractional_knapsack(items: &[(f64, f64)], capacity: f64) -> Result<f64, AlgoError> {
    if items.iter().any(|&(_, w)| w <= 0.0) {
        return Err(AlgoError::InvalidArgument(
            "item weights must be positive".to_string(),
        ));
    }
    let mut by_density = items.to_vec();
    by_density.sort_by(|a, b| (b.0 / b.1).total_cmp(&(a.0 / a.1)));

    let mut total = 0.0;
    let mut remaining = capacity;
    for &(value, weight) in &by_density {
        if remaining <= 0.0 {
            break;
        }
        if weight <= remaining {
            total += value;
            remaining -= weight;
        } else {
            total += value * (remaining / weight);
            remaining = 0.0;
        }
    }
    Ok(total)
}

/// Average huffman code length (bits per symbol) for `data`.
///
/// Computed from the merge weights alone; the code table itself is not
/// materialized. A single-symbol input conventionally codes at one bit.
pub fn huffman_average_length(data: &str) -> Result<f64, AlgoError> {
    if data.is_empty() {
        return Err(AlgoError::InvalidArgument(
            "cannot build a code for empty input".to_string(),
        ));
    }
    let mut freq: HashMap<char, u64> = HashMap::new();
    for ch in data.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    let total: u64 = freq.values().sum();
    if freq.len() == 1 {
        return Ok(1.0);
    }

    let mut heap: BinaryHeap<Reverse<u64>> = freq.values().map(|&c| Reverse(c)).collect();
    let mut cost = 0u64;
    while heap.len() > 1 {
        if let (Some(Reverse(a)), Some(Reverse(b))) = (heap.pop(), heap.pop()) {
            cost += a + b;
            heap.push(Reverse(a + b));
        }
    }
    Ok(cost as f64 / total as f64)
}

fn random_intervals(n: usize, rng: &mut rand_chacha::ChaCha8Rng) -> Vec<(u64, u64)> {
    (0..n)
        .map(|_| {
            let start = rng.gen_range(0..1000);
            (start, start + rng.gen_range(1..=50))
        })
        .collect()
}

fn activity_selection_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 200)?;
    let mut rng = workload_rng(args)?;
    let intervals = random_intervals(n, &mut rng);
    Ok(json!({ "n": n, "selected": activity_selection(&intervals) }))
}

fn fractional_knapsack_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 200)?;
    let mut rng = workload_rng(args)?;
    let items: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(1.0..100.0), rng.gen_range(1.0..20.0)))
        .collect();
    let capacity = n as f64;
    Ok(json!({
        "n": n,
        "capacity": capacity,
        "best_value": fractional_knapsack(&items, capacity)?,
    }))
}

fn huffman_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 200)?;
    let mut rng = workload_rng(args)?;
    let alphabet = ['a', 'b', 'c', 'd'];
    let data: String = (0..n).map(|_| alphabet[rng.gen_range(0..4)]).collect();
    Ok(json!({
        "n": n,
        "avg_code_length": huffman_average_length(&data)?,
    }))
}

fn run_greedy_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 200)?;
    let mut rng = workload_rng(args)?;

    let intervals = random_intervals(n, &mut rng);
    let items: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(1.0..100.0), rng.gen_range(1.0..20.0)))
        .collect();
    let alphabet = ['a', 'b', 'c', 'd'];
    let data: String = (0..n).map(|_| alphabet[rng.gen_range(0..4)]).collect();

    Ok(json!({
        "n": n,
        "activities_selected": activity_selection(&intervals),
        "fractional_best": fractional_knapsack(&items, n as f64)?,
        "huffman_avg_len": huffman_average_length(&data)?,
    }))
}
