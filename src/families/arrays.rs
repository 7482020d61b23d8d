//! Array operations

use super::ints_or_random;
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use serde_json::{json, Value};

/// Registered symbols for the `arrays` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("search_element", search_element),
        ("insert_element", insert_element),
        ("delete_element", delete_element),
        ("array_stats", array_stats),
        ("run_arrays_operations", run_arrays_operations),
    ]
}

/// Linear search; index of the first occurrence.
pub fn linear_search(arr: &[i64], target: i64) -> Option<usize> {
    arr.iter().position(|&x| x == target)
}

/// Remove the first occurrence of `target`; errors when absent.
pub fn remove_first(arr: &mut Vec<i64>, target: i64) -> Result<usize, AlgoError> {
    match linear_search(arr, target) {
        Some(index) => {
            arr.remove(index);
            Ok(index)
        }
        None => Err(AlgoError::Failed(format!("element {target} not in array"))),
    }
}

/// Min / max / mean summary; errors on an empty array.
pub fn stats(arr: &[i64]) -> Result<(i64, i64, f64), AlgoError> {
    if arr.is_empty() {
        return Err(AlgoError::Failed("empty array has no stats".to_string()));
    }
    let (min, max) = arr
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    let mean = arr.iter().sum::<i64>() as f64 / arr.len() as f64;
    Ok((min, max, mean))
}

fn target_of(args: &CallArgs, arr: &[i64]) -> Result<i64, AlgoError> {
    if args.positional.len() >= 2 {
        return args.int_at(1);
    }
    // No explicit target: probe for the middle element of the workload.
    arr.get(arr.len() / 2)
        .copied()
        .ok_or_else(|| AlgoError::InvalidArgument("empty array".to_string()))
}

fn search_element(args: &CallArgs) -> Result<Value, AlgoError> {
    let arr = ints_or_random(args, 1000)?;
    let target = target_of(args, &arr)?;
    Ok(json!({
        "target": target,
        "index": linear_search(&arr, target),
        "n": arr.len(),
    }))
}

fn insert_element(args: &CallArgs) -> Result<Value, AlgoError> {
    let mut arr = ints_or_random(args, 1000)?;
    let element = if args.positional.len() >= 2 {
        args.int_at(1)?
    } else {
        0
    };
    arr.push(element);
    Ok(json!({ "inserted": element, "n": arr.len() }))
}

fn delete_element(args: &CallArgs) -> Result<Value, AlgoError> {
    let mut arr = ints_or_random(args, 1000)?;
    let target = target_of(args, &arr)?;
    let index = remove_first(&mut arr, target)?;
    Ok(json!({ "deleted": target, "index": index, "n": arr.len() }))
}

fn array_stats(args: &CallArgs) -> Result<Value, AlgoError> {
    let arr = ints_or_random(args, 1000)?;
    let (min, max, mean) = stats(&arr)?;
    Ok(json!({ "n": arr.len(), "min": min, "max": max, "mean": mean }))
}

fn run_arrays_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let mut arr = ints_or_random(args, 1000)?;
    let n = arr.len();

    arr.push(7);
    let found = linear_search(&arr, 7).is_some();
    remove_first(&mut arr, 7)?;
    let (min, max, mean) = stats(&arr)?;

    Ok(json!({
        "n": n,
        "insert_then_found": found,
        "min": min,
        "max": max,
        "mean": mean,
    }))
}
