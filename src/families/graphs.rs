//! Graph algorithms over adjacency lists

use super::{workload_rng, workload_size};
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};
use std::collections::{BinaryHeap, VecDeque};

/// Registered symbols for the `graphs` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("bfs", bfs_op),
        ("dfs", dfs_op),
        ("shortest_path", shortest_path_op),
        ("dijkstra", dijkstra_op),
        ("connected_components", connected_components_op),
        ("kruskal", kruskal_op),
        ("prim", prim_op),
        ("mst", mst_op),
        ("minimum_spanning_tree", mst_op),
        ("run_graphs_operations", run_graphs_operations),
    ]
}

/// Weighted undirected edge: `(u, v, weight)`.
pub type WeightedEdge = (usize, usize, u64);

/// Undirected graph as an adjacency list.
pub type Adjacency = Vec<Vec<usize>>;

/// Undirected weighted graph: `(neighbor, weight)` per edge.
pub type WeightedAdjacency = Vec<Vec<(usize, u64)>>;

pub fn build_graph(n: usize, edges: &[(usize, usize)]) -> Adjacency {
    let mut adj = vec![Vec::new(); n];
    for &(u, v) in edges {
        if u < n && v < n && u != v {
            adj[u].push(v);
            adj[v].push(u);
        }
    }
    adj
}

/// Breadth-first visit order from `start`.
pub fn bfs(adj: &Adjacency, start: usize) -> Vec<usize> {
    if start >= adj.len() {
        return Vec::new();
    }
    let mut visited = vec![false; adj.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adj[u] {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    order
}

/// Depth-first visit order from `start` (iterative).
pub fn dfs(adj: &Adjacency, start: usize) -> Vec<usize> {
    if start >= adj.len() {
        return Vec::new();
    }
    let mut visited = vec![false; adj.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        order.push(u);
        for &v in adj[u].iter().rev() {
            if !visited[v] {
                stack.push(v);
            }
        }
    }
    order
}

/// Hop count of the shortest unweighted path, if `end` is reachable.
pub fn shortest_path_unweighted(adj: &Adjacency, start: usize, end: usize) -> Option<usize> {
    if start >= adj.len() || end >= adj.len() {
        return None;
    }
    if start == end {
        return Some(0);
    }
    let mut dist = vec![None; adj.len()];
    dist[start] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for &v in &adj[u] {
            if dist[v].is_none() {
                dist[v] = dist[u].map(|d| d + 1);
                if v == end {
                    return dist[v];
                }
                queue.push_back(v);
            }
        }
    }
    None
}

/// Single-source shortest distances with non-negative integer weights.
pub fn dijkstra(adj: &WeightedAdjacency, start: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; adj.len()];
    if start >= adj.len() {
        return dist;
    }
    dist[start] = Some(0);
    // Max-heap on Reverse gives us the smallest tentative distance first.
    let mut heap = BinaryHeap::from([std::cmp::Reverse((0u64, start))]);
    while let Some(std::cmp::Reverse((d, u))) = heap.pop() {
        if dist[u] != Some(d) {
            continue; // stale entry
        }
        for &(v, w) in &adj[u] {
            let candidate = d + w;
            if dist[v].map_or(true, |current| candidate < current) {
                dist[v] = Some(candidate);
                heap.push(std::cmp::Reverse((candidate, v)));
            }
        }
    }
    dist
}

/// Union-find with path halving; just enough for Kruskal.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`; false if they already share one.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Total weight and edge count of a minimum spanning forest (Kruskal).
///
/// Self-loops and out-of-range endpoints are skipped; on a disconnected
/// graph this spans each component separately.
pub fn kruskal(n: usize, edges: &[WeightedEdge]) -> (u64, usize) {
    let mut sorted: Vec<WeightedEdge> = edges
        .iter()
        .copied()
        .filter(|&(u, v, _)| u < n && v < n && u != v)
        .collect();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut uf = UnionFind::new(n);
    let (mut total, mut used) = (0u64, 0usize);
    for (u, v, w) in sorted {
        if uf.union(u, v) {
            total += w;
            used += 1;
        }
    }
    (total, used)
}

/// Total weight and edge count of a minimum spanning forest (Prim, restarted
/// once per component).
pub fn prim(adj: &WeightedAdjacency) -> (u64, usize) {
    let mut in_tree = vec![false; adj.len()];
    let (mut total, mut used) = (0u64, 0usize);

    for start in 0..adj.len() {
        if in_tree[start] {
            continue;
        }
        in_tree[start] = true;
        let mut heap: BinaryHeap<std::cmp::Reverse<(u64, usize)>> = adj[start]
            .iter()
            .map(|&(v, w)| std::cmp::Reverse((w, v)))
            .collect();
        while let Some(std::cmp::Reverse((w, v))) = heap.pop() {
            if in_tree[v] {
                continue; // stale entry
            }
            in_tree[v] = true;
            total += w;
            used += 1;
            for &(x, wx) in &adj[v] {
                if !in_tree[x] {
                    heap.push(std::cmp::Reverse((wx, x)));
                }
            }
        }
    }
    (total, used)
}

/// Number of connected components.
pub fn connected_components(adj: &Adjacency) -> usize {
    let mut visited = vec![false; adj.len()];
    let mut components = 0;
    for start in 0..adj.len() {
        if visited[start] {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }
    components
}

fn random_graph(n: usize, rng: &mut ChaCha8Rng) -> Adjacency {
    let edges: Vec<(usize, usize)> = (0..n * 2)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    build_graph(n, &edges)
}

fn random_weighted_edges(n: usize, rng: &mut ChaCha8Rng) -> Vec<WeightedEdge> {
    (0..n * 3)
        .map(|_| {
            (
                rng.gen_range(0..n),
                rng.gen_range(0..n),
                rng.gen_range(1..=10),
            )
        })
        .collect()
}

/// Adjacency view of an edge list, with the same self-loop and range
/// filtering as [`kruskal`].
fn weighted_from_edges(n: usize, edges: &[WeightedEdge]) -> WeightedAdjacency {
    let mut adj: WeightedAdjacency = vec![Vec::new(); n];
    for &(u, v, w) in edges {
        if u < n && v < n && u != v {
            adj[u].push((v, w));
            adj[v].push((u, w));
        }
    }
    adj
}

fn random_weighted(n: usize, rng: &mut ChaCha8Rng) -> WeightedAdjacency {
    let mut adj: WeightedAdjacency = vec![Vec::new(); n];
    for u in 0..n {
        for _ in 0..3 {
            let v = rng.gen_range(0..n);
            if v != u {
                let w = rng.gen_range(1..=10);
                adj[u].push((v, w));
                adj[v].push((u, w));
            }
        }
    }
    adj
}

fn workload(args: &CallArgs) -> Result<(usize, Adjacency), AlgoError> {
    let n = workload_size(args, 500)?.max(2);
    let mut rng = workload_rng(args)?;
    Ok((n, random_graph(n, &mut rng)))
}

fn bfs_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, adj) = workload(args)?;
    Ok(json!({ "n": n, "visited": bfs(&adj, 0).len() }))
}

fn dfs_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, adj) = workload(args)?;
    Ok(json!({ "n": n, "visited": dfs(&adj, 0).len() }))
}

fn shortest_path_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, adj) = workload(args)?;
    Ok(json!({
        "n": n,
        "start": 0,
        "end": n - 1,
        "hops": shortest_path_unweighted(&adj, 0, n - 1),
    }))
}

fn dijkstra_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let n = workload_size(args, 500)?.max(2);
    let mut rng = workload_rng(args)?;
    let adj = random_weighted(n, &mut rng);
    let dist = dijkstra(&adj, 0);
    Ok(json!({
        "n": n,
        "reached": dist.iter().filter(|d| d.is_some()).count(),
    }))
}

fn connected_components_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, adj) = workload(args)?;
    Ok(json!({ "n": n, "components": connected_components(&adj) }))
}

fn mst_workload(args: &CallArgs) -> Result<(usize, Vec<WeightedEdge>), AlgoError> {
    let n = workload_size(args, 500)?.max(2);
    let mut rng = workload_rng(args)?;
    Ok((n, random_weighted_edges(n, &mut rng)))
}

fn kruskal_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, edges) = mst_workload(args)?;
    let (weight, used) = kruskal(n, &edges);
    Ok(json!({ "n": n, "mst_weight": weight, "tree_edges": used }))
}

fn prim_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, edges) = mst_workload(args)?;
    let (weight, used) = prim(&weighted_from_edges(n, &edges));
    Ok(json!({ "n": n, "mst_weight": weight, "tree_edges": used }))
}

/// Run Kruskal and Prim on the same graph and cross-check: the minimum
/// spanning forest weight is unique even when individual edge weights tie.
fn mst_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, edges) = mst_workload(args)?;
    let (kruskal_weight, used) = kruskal(n, &edges);
    let (prim_weight, _) = prim(&weighted_from_edges(n, &edges));
    if kruskal_weight != prim_weight {
        return Err(AlgoError::Failed(format!(
            "kruskal and prim disagree: {kruskal_weight} vs {prim_weight}"
        )));
    }
    Ok(json!({
        "n": n,
        "mst_weight": kruskal_weight,
        "tree_edges": used,
        "algorithms_agree": true,
    }))
}

fn run_graphs_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let (n, adj) = workload(args)?;
    let mut rng = workload_rng(args)?;
    let weighted = random_weighted(n, &mut rng);
    let dist = dijkstra(&weighted, 0);
    let edges = random_weighted_edges(n, &mut rng);
    let (mst_weight, _) = kruskal(n, &edges);

    Ok(json!({
        "n": n,
        "bfs_visited": bfs(&adj, 0).len(),
        "dfs_visited": dfs(&adj, 0).len(),
        "components": connected_components(&adj),
        "dijkstra_reached": dist.iter().filter(|d| d.is_some()).count(),
        "mst_weight": mst_weight,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Adjacency {
        // 0 - 1 - 2 - 3
        build_graph(4, &[(0, 1), (1, 2), (2, 3)])
    }

    #[test]
    fn test_bfs_visits_reachable_nodes() {
        assert_eq!(bfs(&path_graph(), 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_dfs_visits_reachable_nodes() {
        assert_eq!(dfs(&path_graph(), 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_shortest_path_hops() {
        let adj = build_graph(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(shortest_path_unweighted(&adj, 0, 3), Some(1));
        assert_eq!(shortest_path_unweighted(&adj, 0, 0), Some(0));

        let disconnected = build_graph(3, &[(0, 1)]);
        assert_eq!(shortest_path_unweighted(&disconnected, 0, 2), None);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_route() {
        // 0 -(10)- 2 vs 0 -(1)- 1 -(1)- 2
        let mut adj: WeightedAdjacency = vec![Vec::new(); 3];
        adj[0].push((2, 10));
        adj[2].push((0, 10));
        adj[0].push((1, 1));
        adj[1].push((0, 1));
        adj[1].push((2, 1));
        adj[2].push((1, 1));
        let dist = dijkstra(&adj, 0);
        assert_eq!(dist[2], Some(2));
    }

    #[test]
    fn test_connected_components() {
        assert_eq!(connected_components(&build_graph(5, &[(0, 1), (2, 3)])), 3);
        assert_eq!(connected_components(&path_graph()), 1);
    }

    #[test]
    fn test_kruskal_known_graph() {
        // Square with one cheap diagonal: 0-1 (1), 0-2 (1), 2-3 (3).
        let edges = [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 1)];
        assert_eq!(kruskal(4, &edges), (5, 3));
    }

    #[test]
    fn test_prim_matches_kruskal() {
        use rand::SeedableRng;
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let edges = random_weighted_edges(50, &mut rng);
        let (kruskal_weight, kruskal_edges) = kruskal(50, &edges);
        let (prim_weight, prim_edges) = prim(&weighted_from_edges(50, &edges));
        assert_eq!(kruskal_weight, prim_weight);
        assert_eq!(kruskal_edges, prim_edges);
    }

    #[test]
    fn test_mst_forest_on_disconnected_graph() {
        // Two components: the forest has n - components edges.
        let edges = [(0, 1, 5), (2, 3, 7)];
        assert_eq!(kruskal(4, &edges), (12, 2));
        assert_eq!(prim(&weighted_from_edges(4, &edges)), (12, 2));
    }

    #[test]
    fn test_bulk_runner() {
        let out = run_graphs_operations(&CallArgs::none()).unwrap();
        assert_eq!(out["n"], json!(500));
        assert!(out["components"].as_u64().unwrap() >= 1);
    }
}
