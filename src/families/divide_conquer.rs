//! Divide-and-conquer algorithms

use super::{ints_or_random, workload_rng, workload_size};
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use rand::Rng;
use serde_json::{json, Value};

/// Registered symbols for the `divide_conquer` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("binary_search", binary_search_op),
        ("count_inversions", count_inversions_op),
        ("closest_pair", closest_pair_op),
        ("run_divide_conquer_operations", run_divide_conquer_operations),
    ]
}

/// Index of `target` in a sorted slice, if present.
pub fn binary_search(sorted: &[i64], target: i64) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, sorted.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Number of pairs (i, j) with i < j and arr[i] > arr[j], counted during a
/// merge sort.
pub fn count_inversions(arr: &[i64]) -> u64 {
    fn sort_count(arr: &mut Vec<i64>) -> u64 {
        if arr.len() <= 1 {
            return 0;
        }
        let mid = arr.len() / 2;
        let mut left: Vec<i64> = arr[..mid].to_vec();
        let mut right: Vec<i64> = arr[mid..].to_vec();
        let mut inversions = sort_count(&mut left) + sort_count(&mut right);

        let (mut i, mut j, mut k) = (0, 0, 0);
        while i < left.len() && j < right.len() {
            if left[i] <= right[j] {
                arr[k] = left[i];
                i += 1;
            } else {
                arr[k] = right[j];
                j += 1;
                inversions += (left.len() - i) as u64;
            }
            k += 1;
        }
        while i < left.len() {
            arr[k] = left[i];
            i += 1;
            k += 1;
        }
        while j < right.len() {
            arr[k] = right[j];
            j += 1;
            k += 1;
        }
        inversions
    }
    let mut work = arr.to_vec();
    sort_count(&mut work)
}

/// Smallest euclidean distance between any two points; errors with fewer
/// than two points.
pub fn closest_pair(points: &[(f64, f64)]) -> Result<f64, AlgoError> {
    if points.len() < 2 {
        return Err(AlgoError::InvalidArgument(
            "closest_pair needs at least two points".to_string(),
        ));
    }
    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(closest_recursive(&by_x))
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn closest_recursive(by_x: &[(f64, f64)]) -> f64 {
    if by_x.len() <= 3 {
        let mut best = f64::INFINITY;
        for i in 0..by_x.len() {
            for j in i + 1..by_x.len() {
                best = best.min(distance(by_x[i], by_x[j]));
            }
        }
        return best;
    }

    let mid = by_x.len() / 2;
    let mid_x = by_x[mid].0;
    let best = closest_recursive(&by_x[..mid]).min(closest_recursive(&by_x[mid..]));

    // Strip around the dividing line, checked by y-proximity.
    let mut strip: Vec<(f64, f64)> = by_x
        .iter()
        .copied()
        .filter(|p| (p.0 - mid_x).abs() < best)
        .collect();
    strip.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut strip_best = best;
    for i in 0..strip.len() {
        for j in i + 1..strip.len() {
            if strip[j].1 - strip[i].1 >= strip_best {
                break;
            }
            strip_best = strip_best.min(distance(strip[i], strip[j]));
        }
    }
    strip_best
}

/// Middle element of a sorted workload, used as the search target when the
/// caller gave none. An explicit empty array has no probe to offer.
fn median_probe(sorted: &[i64]) -> Result<i64, AlgoError> {
    sorted
        .get(sorted.len() / 2)
        .copied()
        .ok_or_else(|| AlgoError::InvalidArgument("empty input array".to_string()))
}

fn binary_search_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let mut arr = ints_or_random(args, 10_000)?;
    arr.sort_unstable();
    let target = if args.positional.len() >= 2 {
        args.int_at(1)?
    } else {
        median_probe(&arr)?
    };
    Ok(json!({
        "n": arr.len(),
        "target": target,
        "index": binary_search(&arr, target),
    }))
}

fn count_inversions_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let arr = ints_or_random(args, 10_000)?;
    Ok(json!({ "n": arr.len(), "inversions": count_inversions(&arr) }))
}

fn closest_pair_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 1000)?;
    let mut rng = workload_rng(args)?;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect();
    Ok(json!({ "n": n, "min_distance": closest_pair(&points)? }))
}

fn run_divide_conquer_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let arr = ints_or_random(args, 10_000)?;
    let mut sorted = arr.clone();
    sorted.sort_unstable();
    let target = median_probe(&sorted)?;

    let mut rng = workload_rng(args)?;
    let points: Vec<(f64, f64)> = (0..500)
        .map(|_| (rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect();

    Ok(json!({
        "n": arr.len(),
        "binary_search_found": binary_search(&sorted, target).is_some(),
        "inversions": count_inversions(&arr),
        "closest_pair": closest_pair(&points)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search() {
        let arr = [1, 3, 5, 7, 9];
        assert_eq!(binary_search(&arr, 7), Some(3));
        assert_eq!(binary_search(&arr, 4), None);
        assert_eq!(binary_search(&[], 1), None);
    }

    #[test]
    fn test_count_inversions() {
        assert_eq!(count_inversions(&[1, 2, 3]), 0);
        assert_eq!(count_inversions(&[3, 2, 1]), 3);
        assert_eq!(count_inversions(&[2, 4, 1, 3, 5]), 3);
    }

    #[test]
    fn test_closest_pair_small() {
        let points = [(0.0, 0.0), (5.0, 0.0), (1.0, 1.0)];
        let d = closest_pair(&points).unwrap();
        assert!((d - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_closest_pair_matches_brute_force() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        let points: Vec<(f64, f64)> = (0..200)
            .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
            .collect();

        let mut brute = f64::INFINITY;
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                brute = brute.min(distance(points[i], points[j]));
            }
        }
        let fast = closest_pair(&points).unwrap();
        assert!((fast - brute).abs() < 1e-9);
    }

    #[test]
    fn test_closest_pair_needs_two_points() {
        assert!(closest_pair(&[(0.0, 0.0)]).is_err());
    }

    #[test]
    fn test_explicit_empty_array_is_invalid_argument() {
        // An empty positional array is a bad argument, not a panic.
        let args = CallArgs::with_positional(vec![json!([])]);
        assert!(matches!(
            binary_search_op(&args),
            Err(AlgoError::InvalidArgument(_))
        ));
        assert!(matches!(
            run_divide_conquer_operations(&args),
            Err(AlgoError::InvalidArgument(_))
        ));
    }
}
