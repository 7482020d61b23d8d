//! Hash map workloads

use super::{ints_or_random, workload_rng};
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use rand::Rng;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Registered symbols for the `hashing` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("lookup", lookup_op),
        ("run_hashing_operations", run_hashing_operations),
    ]
}

/// Insert every value keyed by itself, then probe with `probes`.
/// Returns (hits, misses).
pub fn probe_map(values: &[i64], probes: &[i64]) -> (usize, usize) {
    let mut map: HashMap<i64, i64> = HashMap::with_capacity(values.len());
    for &v in values {
        map.insert(v, v);
    }
    let hits = probes.iter().filter(|p| map.contains_key(p)).count();
    (hits, probes.len() - hits)
}

fn lookup_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let (hits, misses) = probe_map(&values, &values);
    Ok(json!({
        "n": values.len(),
        "hits": hits,
        "misses": misses,
    }))
}

fn run_hashing_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let mut rng = workload_rng(args)?;

    // Probe with a mix of known values and fresh randoms.
    let probes: Vec<i64> = values
        .iter()
        .map(|&v| {
            if rng.gen_bool(0.5) {
                v
            } else {
                rng.gen_range(-10_000..=10_000)
            }
        })
        .collect();

    let (hits, misses) = probe_map(&values, &probes);

    Ok(json!({
        "n": values.len(),
        "probes": probes.len(),
        "hits": hits,
        "misses": misses,
    }))
}
