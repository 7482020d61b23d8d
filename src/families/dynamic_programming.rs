//! Dynamic programming algorithms

use super::{workload_rng, workload_size};
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use rand::Rng;
use serde_json::{json, Value};

/// Registered symbols for the `dynamic_programming` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("fibonacci", fibonacci_op),
        ("knapsack", knapsack_op),
        ("lcs", lcs_op),
        ("coin_change", coin_change_op),
        ("subset_sum", subset_sum_op),
        ("matrix_chain", matrix_chain_op),
        (
            "run_dynamic_programming_operations",
            run_dynamic_programming_operations,
        ),
    ]
}

/// Tabulated fibonacci; errors past the u64 range (n > 93).
pub fn fibonacci(n: u64) -> Result<u64, AlgoError> {
    if n > 93 {
        return Err(AlgoError::IndexRange(format!(
            "fibonacci({n}) overflows u64; max is 93"
        )));
    }
    // Accumulate in u128: the loop's scratch value reaches F(n+1), which
    // would overflow u64 already at n = 93.
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    Ok(a as u64)
}

/// 0/1 knapsack: maximum value within `capacity`.
pub fn knapsack(weights: &[u64], values: &[u64], capacity: u64) -> Result<u64, AlgoError> {
    if weights.len() != values.len() {
        return Err(AlgoError::InvalidArgument(
            "weights and values must have equal length".to_string(),
        ));
    }
    let cap = capacity as usize;
    let mut best = vec![0u64; cap + 1];
    for (&w, &v) in weights.iter().zip(values) {
        let w = w as usize;
        for c in (w..=cap).rev() {
            best[c] = best[c].max(best[c - w] + v);
        }
    }
    Ok(best[cap])
}

/// Length of the longest common subsequence.
pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

/// Minimum coins summing to `amount`; None when unreachable.
pub fn coin_change(coins: &[u64], amount: u64) -> Option<u64> {
    let amount = amount as usize;
    let mut dp: Vec<Option<u64>> = vec![None; amount + 1];
    dp[0] = Some(0);
    for a in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin == 0 || coin > a {
                continue;
            }
            if let Some(prev) = dp[a - coin] {
                dp[a] = Some(dp[a].map_or(prev + 1, |cur| cur.min(prev + 1)));
            }
        }
    }
    dp[amount]
}

/// Whether some subset of `nums` sums exactly to `target`.
pub fn subset_sum(nums: &[u64], target: u64) -> bool {
    let target = target as usize;
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;
    for &num in nums {
        let num = num as usize;
        if num == 0 || num > target {
            continue;
        }
        for t in (num..=target).rev() {
            if reachable[t - num] {
                reachable[t] = true;
            }
        }
    }
    reachable[target]
}

/// Minimum scalar multiplications to evaluate a matrix chain; `dims` holds
/// the n + 1 dimensions of an n-matrix chain.
pub fn matrix_chain_order(dims: &[u64]) -> Result<u64, AlgoError> {
    if dims.len() < 2 {
        return Err(AlgoError::InvalidArgument(
            "matrix chain needs at least two dimensions".to_string(),
        ));
    }
    let n = dims.len() - 1;
    let mut dp = vec![vec![0u64; n]; n];
    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            dp[i][j] = u64::MAX;
            for k in i..j {
                let cost = dp[i][k] + dp[k + 1][j] + dims[i] * dims[k + 1] * dims[j + 1];
                dp[i][j] = dp[i][j].min(cost);
            }
        }
    }
    Ok(dp[0][n - 1])
}

fn fibonacci_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = if args.positional.is_empty() {
        args.u64_kw("n")?.unwrap_or(90)
    } else {
        args.int_at(0)? as u64
    };
    Ok(json!({ "n": n, "fibonacci": fibonacci(n)? }))
}

fn knapsack_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 200)?;
    let mut rng = workload_rng(args)?;
    let weights: Vec<u64> = (0..n).map(|_| rng.gen_range(1..=50)).collect();
    let values: Vec<u64> = (0..n).map(|_| rng.gen_range(1..=100)).collect();
    let capacity = (n as u64) * 10;
    Ok(json!({
        "n": n,
        "capacity": capacity,
        "best_value": knapsack(&weights, &values, capacity)?,
    }))
}

fn lcs_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 500)?;
    let mut rng = workload_rng(args)?;
    let alphabet = ['a', 'b', 'c', 'd'];
    let a: String = (0..n).map(|_| alphabet[rng.gen_range(0..4)]).collect();
    let b: String = (0..n).map(|_| alphabet[rng.gen_range(0..4)]).collect();
    Ok(json!({
        "n": n,
        "lcs_length": longest_common_subsequence(&a, &b),
    }))
}

fn coin_change_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let amount = args.u64_kw("amount")?.unwrap_or(997);
    let coins = [1u64, 5, 10, 25];
    Ok(json!({
        "amount": amount,
        "coins": coins,
        "min_coins": coin_change(&coins, amount),
    }))
}

fn subset_sum_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 200)?;
    let mut rng = workload_rng(args)?;
    let nums: Vec<u64> = (0..n).map(|_| rng.gen_range(1..=50)).collect();
    let target = args
        .u64_kw("target")?
        .unwrap_or_else(|| nums.iter().sum::<u64>() / 2);
    Ok(json!({
        "n": n,
        "target": target,
        "reachable": subset_sum(&nums, target),
    }))
}

fn matrix_chain_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 50)?.max(1);
    let mut rng = workload_rng(args)?;
    let dims: Vec<u64> = (0..=n).map(|_| rng.gen_range(1..=20)).collect();
    Ok(json!({
        "n": n,
        "min_multiplications": matrix_chain_order(&dims)?,
    }))
}

fn run_dynamic_programming_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 200)?;
    let mut rng = workload_rng(args)?;

    let weights: Vec<u64> = (0..n).map(|_| rng.gen_range(1..=50)).collect();
    let values: Vec<u64> = (0..n).map(|_| rng.gen_range(1..=100)).collect();

    let alphabet = ['a', 'b', 'c', 'd'];
    let a: String = (0..n).map(|_| alphabet[rng.gen_range(0..4)]).collect();
    let b: String = (0..n).map(|_| alphabet[rng.gen_range(0..4)]).collect();

    let target = weights.iter().sum::<u64>() / 2;
    let dims: Vec<u64> = (0..=n.clamp(1, 50)).map(|_| rng.gen_range(1..=20)).collect();

    Ok(json!({
        "n": n,
        "fibonacci_90": fibonacci(90)?,
        "knapsack_best": knapsack(&weights, &values, (n as u64) * 10)?,
        "lcs_length": longest_common_subsequence(&a, &b),
        "coin_change_997": coin_change(&[1, 5, 10, 25], 997),
        "subset_sum_reachable": subset_sum(&weights, target),
        "matrix_chain_cost": matrix_chain_order(&dims)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0).unwrap(), 0);
        assert_eq!(fibonacci(10).unwrap(), 55);
        assert_eq!(fibonacci(93).unwrap(), 12200160415121876738);
        assert!(fibonacci(94).is_err());
    }

    #[test]
    fn test_knapsack() {
        // Classic: capacity 50, items (10,60) (20,100) (30,120) -> 220
        assert_eq!(knapsack(&[10, 20, 30], &[60, 100, 120], 50).unwrap(), 220);
        assert!(knapsack(&[1, 2], &[1], 10).is_err());
    }

    #[test]
    fn test_lcs() {
        assert_eq!(longest_common_subsequence("abcde", "ace"), 3);
        assert_eq!(longest_common_subsequence("abc", "def"), 0);
        assert_eq!(longest_common_subsequence("", "abc"), 0);
    }

    #[test]
    fn test_coin_change() {
        assert_eq!(coin_change(&[1, 5, 10, 25], 30), Some(2));
        assert_eq!(coin_change(&[7], 13), None);
        assert_eq!(coin_change(&[2], 0), Some(0));
    }

    #[test]
    fn test_subset_sum() {
        assert!(subset_sum(&[3, 34, 4, 12, 5, 2], 9));
        assert!(!subset_sum(&[3, 34, 4, 12, 5, 2], 30));
        assert!(subset_sum(&[], 0));
        assert!(!subset_sum(&[], 1));
    }

    #[test]
    fn test_matrix_chain_order() {
        // (1x2)(2x3)(3x4): ((AB)C) costs 1*2*3 + 1*3*4 = 18.
        assert_eq!(matrix_chain_order(&[1, 2, 3, 4]).unwrap(), 18);
        // A single matrix needs no multiplications.
        assert_eq!(matrix_chain_order(&[10, 20]).unwrap(), 0);
        assert!(matrix_chain_order(&[10]).is_err());
    }

    #[test]
    fn test_bulk_runner_is_deterministic() {
        let a = run_dynamic_programming_operations(&CallArgs::none()).unwrap();
        let b = run_dynamic_programming_operations(&CallArgs::none()).unwrap();
        assert_eq!(a, b);
    }
}
