//! Algorithm family implementations
//!
//! Each module exposes pure algorithm functions, registry wrappers sharing
//! the [`AlgoFn`](crate::registry::AlgoFn) signature, and one bulk runner
//! `run_<family_id>_operations` that exercises the family on a deterministic
//! seeded workload and returns a JSON summary.
//!
//! Wrappers accept explicit positional input where it makes sense and fall
//! back to a seeded random workload otherwise, so every registered symbol is
//! runnable with no arguments. Workload size and seed can be overridden with
//! the `n` / `seed` keyword arguments.

use crate::registry::{AlgoError, CallArgs};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod arrays;
pub mod divide_conquer;
pub mod dynamic_programming;
pub mod graphs;
pub mod greedy;
pub mod hashing;
pub mod linked_list;
pub mod sorting;
pub mod stacks_queues;
pub mod trees;

pub(crate) const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG for workload generation, seeded from the `seed` keyword
/// argument when present.
pub(crate) fn workload_rng(args: &CallArgs) -> Result<ChaCha8Rng, AlgoError> {
    let seed = args.u64_kw("seed")?.unwrap_or(DEFAULT_SEED);
    Ok(ChaCha8Rng::seed_from_u64(seed))
}

/// Workload size from the `n` keyword argument, defaulting per family.
pub(crate) fn workload_size(args: &CallArgs, default: u64) -> Result<usize, AlgoError> {
    Ok(args.u64_kw("n")?.unwrap_or(default) as usize)
}

/// First positional integer array if supplied, otherwise a seeded random one.
pub(crate) fn ints_or_random(args: &CallArgs, default_n: u64) -> Result<Vec<i64>, AlgoError> {
    if !args.positional.is_empty() {
        return args.ints_at(0);
    }
    let n = workload_size(args, default_n)?;
    let mut rng = workload_rng(args)?;
    Ok((0..n).map(|_| rng.gen_range(-1000..=1000)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_workload_is_deterministic() {
        let a = ints_or_random(&CallArgs::none(), 50).unwrap();
        let b = ints_or_random(&CallArgs::none(), 50).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn test_explicit_input_wins_over_random() {
        let args = CallArgs::with_positional(vec![serde_json::json!([5, 4, 3])]);
        assert_eq!(ints_or_random(&args, 50).unwrap(), vec![5, 4, 3]);
    }
}
