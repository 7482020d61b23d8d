//! Binary search tree operations

use super::ints_or_random;
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use serde_json::{json, Value};

/// Registered symbols for the `trees` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("traversal", traversal_op),
        ("avl", avl_op),
        ("run_trees_operations", run_trees_operations),
    ]
}

/// Unbalanced binary search tree; duplicates are ignored.
pub struct Bst {
    root: Option<Box<BstNode>>,
    len: usize,
}

struct BstNode {
    value: i64,
    left: Option<Box<BstNode>>,
    right: Option<Box<BstNode>>,
}

impl Bst {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn from_slice(values: &[i64]) -> Self {
        let mut tree = Self::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    pub fn insert(&mut self, value: i64) {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            if value == node.value {
                return;
            }
            cursor = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cursor = Some(Box::new(BstNode {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if value == node.value {
                return true;
            }
            cursor = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// In-order traversal; sorted by construction.
    pub fn inorder(&self) -> Vec<i64> {
        fn walk(node: Option<&BstNode>, out: &mut Vec<i64>) {
            if let Some(node) = node {
                walk(node.left.as_deref(), out);
                out.push(node.value);
                walk(node.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut out);
        out
    }

    pub fn height(&self) -> usize {
        fn depth(node: Option<&BstNode>) -> usize {
            match node {
                None => 0,
                Some(node) => 1 + depth(node.left.as_deref()).max(depth(node.right.as_deref())),
            }
        }
        depth(self.root.as_deref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Bst {
    fn default() -> Self {
        Self::new()
    }
}

/// Self-balancing (AVL) binary search tree; duplicates are ignored.
pub struct Avl {
    root: Option<Box<AvlNode>>,
    len: usize,
}

struct AvlNode {
    value: i64,
    height: i64,
    left: Option<Box<AvlNode>>,
    right: Option<Box<AvlNode>>,
}

fn subtree_height(node: &Option<Box<AvlNode>>) -> i64 {
    node.as_ref().map_or(0, |n| n.height)
}

fn update_height(node: &mut AvlNode) {
    node.height = 1 + subtree_height(&node.left).max(subtree_height(&node.right));
}

fn balance_factor(node: &AvlNode) -> i64 {
    subtree_height(&node.left) - subtree_height(&node.right)
}

fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    match y.left.take() {
        Some(mut x) => {
            y.left = x.right.take();
            update_height(&mut y);
            x.right = Some(y);
            update_height(&mut x);
            x
        }
        // Never rotated without a left child; returned unchanged to keep the
        // function total.
        None => y,
    }
}

fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    match x.right.take() {
        Some(mut y) => {
            x.right = y.left.take();
            update_height(&mut x);
            y.left = Some(x);
            update_height(&mut y);
            y
        }
        None => x,
    }
}

fn rebalance(mut node: Box<AvlNode>) -> Box<AvlNode> {
    let bf = balance_factor(&node);
    if bf > 1 {
        if let Some(left) = node.left.take() {
            node.left = Some(if balance_factor(&left) < 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        rotate_right(node)
    } else if bf < -1 {
        if let Some(right) = node.right.take() {
            node.right = Some(if balance_factor(&right) > 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        rotate_left(node)
    } else {
        node
    }
}

fn avl_insert(node: Option<Box<AvlNode>>, value: i64, inserted: &mut bool) -> Box<AvlNode> {
    let mut node = match node {
        None => {
            *inserted = true;
            return Box::new(AvlNode {
                value,
                height: 1,
                left: None,
                right: None,
            });
        }
        Some(mut n) => {
            if value < n.value {
                n.left = Some(avl_insert(n.left.take(), value, inserted));
            } else if value > n.value {
                n.right = Some(avl_insert(n.right.take(), value, inserted));
            }
            n
        }
    };
    update_height(&mut node);
    rebalance(node)
}

impl Avl {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn from_slice(values: &[i64]) -> Self {
        let mut tree = Self::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    pub fn insert(&mut self, value: i64) {
        let mut inserted = false;
        self.root = Some(avl_insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if value == node.value {
                return true;
            }
            cursor = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    pub fn inorder(&self) -> Vec<i64> {
        fn walk(node: Option<&AvlNode>, out: &mut Vec<i64>) {
            if let Some(node) = node {
                walk(node.left.as_deref(), out);
                out.push(node.value);
                walk(node.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_deref(), &mut out);
        out
    }

    pub fn height(&self) -> usize {
        subtree_height(&self.root) as usize
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Avl {
    fn default() -> Self {
        Self::new()
    }
}

fn traversal_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let tree = Bst::from_slice(&values);
    let inorder = tree.inorder();
    Ok(json!({
        "n": tree.len(),
        "sorted": inorder.windows(2).all(|w| w[0] <= w[1]),
        "min": inorder.first(),
        "max": inorder.last(),
    }))
}

fn avl_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let tree = Avl::from_slice(&values);
    let inorder = tree.inorder();
    Ok(json!({
        "n": tree.len(),
        "height": tree.height(),
        "sorted": inorder.windows(2).all(|w| w[0] < w[1]),
    }))
}

fn run_trees_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let tree = Bst::from_slice(&values);
    let balanced = Avl::from_slice(&values);
    let inorder = tree.inorder();

    Ok(json!({
        "n": tree.len(),
        "height": tree.height(),
        "avl_height": balanced.height(),
        "inorder_sorted": inorder.windows(2).all(|w| w[0] < w[1]),
        "contains_first": values.first().map(|&v| tree.contains(v)),
    }))
}
