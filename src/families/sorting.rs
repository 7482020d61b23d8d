//! Sorting algorithms

use super::ints_or_random;
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use serde_json::{json, Value};

/// Registered symbols for the `sorting` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("merge_sort", merge_sort_op),
        ("quick_sort", quick_sort_op),
        ("heap_sort", heap_sort_op),
        ("insertion_sort", insertion_sort_op),
        ("selection_sort", selection_sort_op),
        ("bubble_sort", bubble_sort_op),
        ("run_sorting_operations", run_sorting_operations),
    ]
}

pub fn merge_sort(arr: &[i64]) -> Vec<i64> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);
    merge(&left, &right)
}

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

pub fn quick_sort(arr: &[i64]) -> Vec<i64> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let pivot = arr[arr.len() / 2];
    let less: Vec<i64> = arr.iter().copied().filter(|&x| x < pivot).collect();
    let equal: Vec<i64> = arr.iter().copied().filter(|&x| x == pivot).collect();
    let greater: Vec<i64> = arr.iter().copied().filter(|&x| x > pivot).collect();

    let mut out = quick_sort(&less);
    out.extend(equal);
    out.extend(quick_sort(&greater));
    out
}

pub fn heap_sort(arr: &[i64]) -> Vec<i64> {
    let mut heap: std::collections::BinaryHeap<std::cmp::Reverse<i64>> =
        arr.iter().map(|&x| std::cmp::Reverse(x)).collect();
    let mut out = Vec::with_capacity(arr.len());
    while let Some(std::cmp::Reverse(x)) = heap.pop() {
        out.push(x);
    }
    out
}

pub fn insertion_sort(arr: &[i64]) -> Vec<i64> {
    let mut out = arr.to_vec();
    for i in 1..out.len() {
        let key = out[i];
        let mut j = i;
        while j > 0 && out[j - 1] > key {
            out[j] = out[j - 1];
            j -= 1;
        }
        out[j] = key;
    }
    out
}

pub fn selection_sort(arr: &[i64]) -> Vec<i64> {
    let mut out = arr.to_vec();
    for i in 0..out.len() {
        let mut smallest = i;
        for j in i + 1..out.len() {
            if out[j] < out[smallest] {
                smallest = j;
            }
        }
        out.swap(i, smallest);
    }
    out
}

pub fn bubble_sort(arr: &[i64]) -> Vec<i64> {
    let mut out = arr.to_vec();
    for pass in 0..out.len() {
        let mut swapped = false;
        for j in 0..out.len().saturating_sub(pass + 1) {
            if out[j] > out[j + 1] {
                out.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    out
}

fn sorted_response(algorithm: &str, sorted: Vec<i64>) -> Value {
    json!({
        "algorithm": algorithm,
        "n": sorted.len(),
        "first": sorted.first(),
        "last": sorted.last(),
    })
}

fn merge_sort_op(args: &CallArgs) -> Result<Value, AlgoError> {
    Ok(sorted_response("merge_sort", merge_sort(&ints_or_random(args, 1000)?)))
}

fn quick_sort_op(args: &CallArgs) -> Result<Value, AlgoError> {
    Ok(sorted_response("quick_sort", quick_sort(&ints_or_random(args, 1000)?)))
}

fn heap_sort_op(args: &CallArgs) -> Result<Value, AlgoError> {
    Ok(sorted_response("heap_sort", heap_sort(&ints_or_random(args, 1000)?)))
}

fn insertion_sort_op(args: &CallArgs) -> Result<Value, AlgoError> {
    Ok(sorted_response(
        "insertion_sort",
        insertion_sort(&ints_or_random(args, 1000)?),
    ))
}

fn selection_sort_op(args: &CallArgs) -> Result<Value, AlgoError> {
    Ok(sorted_response(
        "selection_sort",
        selection_sort(&ints_or_random(args, 1000)?),
    ))
}

fn bubble_sort_op(args: &CallArgs) -> Result<Value, AlgoError> {
    Ok(sorted_response(
        "bubble_sort",
        bubble_sort(&ints_or_random(args, 1000)?),
    ))
}

/// Run every sorter on one shared random input and cross-check the results.
fn run_sorting_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let data = ints_or_random(args, 1000)?;
    let reference = merge_sort(&data);
    let agree = quick_sort(&data) == reference
        && heap_sort(&data) == reference
        && insertion_sort(&data) == reference
        && selection_sort(&data) == reference
        && bubble_sort(&data) == reference;
    if !agree {
        return Err(AlgoError::Failed("sorters disagree on output".to_string()));
    }

    Ok(json!({
        "n": data.len(),
        "algorithms": [
            "merge_sort",
            "quick_sort",
            "heap_sort",
            "insertion_sort",
            "selection_sort",
            "bubble_sort",
        ],
        "all_agree": true,
        "min": reference.first(),
        "max": reference.last(),
    }))
}
