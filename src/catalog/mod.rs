//! Family vocabulary catalog
//!
//! Static table mapping each algorithm family to the keywords/phrases it
//! recognizes. Family order is the resolution priority order: several
//! families share ambiguous keywords (e.g. "node" appears in both graph and
//! linked-list vocabularies, "insert" in arrays and linked lists), and the
//! first matching family in this order wins.

/// One family and its recognized keywords, in declared order.
#[derive(Debug, Clone, Copy)]
pub struct FamilyEntry {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
}

/// Priority-ordered, read-only family vocabulary.
///
/// Built once at process start and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: &'static [FamilyEntry],
}

/// The standard vocabulary, in fixed priority order.
const STANDARD_ENTRIES: &[FamilyEntry] = &[
    FamilyEntry {
        id: "arrays",
        keywords: &[
            "array", "index", "append", "insert", "delete", "update", "search", "find",
            "position",
        ],
    },
    FamilyEntry {
        id: "linked_list",
        keywords: &["linked list", "node", "insert", "delete", "traverse", "pointer"],
    },
    FamilyEntry {
        id: "stacks_queues",
        keywords: &[
            "stack", "queue", "push", "pop", "enqueue", "dequeue", "fifo", "lifo",
        ],
    },
    FamilyEntry {
        id: "hashing",
        keywords: &["hash", "hashmap", "dictionary", "lookup", "fast search", "collision"],
    },
    FamilyEntry {
        id: "trees",
        keywords: &[
            "tree", "bst", "binary tree", "traversal", "height", "depth", "balanced",
        ],
    },
    FamilyEntry {
        id: "graphs",
        keywords: &[
            "graph",
            "edge",
            "node",
            "vertex",
            "route",
            "shortest path",
            "distance",
            "mst",
            "minimum spanning tree",
            "dijkstra",
            "kruskal",
            "prim",
        ],
    },
    FamilyEntry {
        id: "sorting",
        keywords: &["sort", "order", "arrange", "ascending", "descending"],
    },
    FamilyEntry {
        id: "divide_conquer",
        keywords: &[
            "divide",
            "conquer",
            "merge sort",
            "quick sort",
            "binary search",
            "closest pair",
            "inversion",
        ],
    },
    FamilyEntry {
        id: "dynamic_programming",
        keywords: &[
            "dp", "fibonacci", "knapsack", "subset", "lcs", "coin change", "matrix chain",
            "optimal",
        ],
    },
    FamilyEntry {
        id: "greedy",
        keywords: &[
            "greedy",
            "activity",
            "schedule",
            "compression",
            "huffman",
            "fractional knapsack",
        ],
    },
];

impl Catalog {
    /// The standard family vocabulary.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES,
        }
    }

    /// Families in priority order.
    pub fn families(&self) -> impl Iterator<Item = &FamilyEntry> {
        self.entries.iter()
    }

    /// Keyword list for a family, in declared order.
    pub fn keywords(&self, family_id: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|e| e.id == family_id)
            .map(|e| e.keywords)
    }
}
