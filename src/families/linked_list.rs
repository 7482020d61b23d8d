//! Singly linked list operations

use super::ints_or_random;
use crate::registry::{AlgoError, AlgoFn, CallArgs};
use serde_json::{json, Value};

/// Registered symbols for the `linked_list` family.
pub fn symbols() -> Vec<(&'static str, AlgoFn)> {
    vec![
        ("traverse", traverse_op),
        ("run_linked_list_operations", run_linked_list_operations),
    ]
}

pub struct LinkedList {
    head: Option<Box<Node>>,
    len: usize,
}

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

impl LinkedList {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn from_slice(values: &[i64]) -> Self {
        let mut list = Self::new();
        // Push in reverse so traversal yields the original order.
        for &value in values.iter().rev() {
            list.push_front(value);
        }
        list
    }

    pub fn push_front(&mut self, value: i64) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Remove the first node holding `value`; true when one was removed.
    pub fn remove_first(&mut self, value: i64) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.value == value => {
                    *cursor = node.next.take();
                    self.len -= 1;
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    pub fn traverse(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(node.value);
            cursor = node.next.as_deref();
        }
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

fn traverse_op(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let list = LinkedList::from_slice(&values);
    let visited = list.traverse();
    Ok(json!({
        "n": visited.len(),
        "first": visited.first(),
        "last": visited.last(),
    }))
}

fn run_linked_list_operations(args: &CallArgs) -> Result<Value, AlgoError> {
    let values = ints_or_random(args, 1000)?;
    let mut list = LinkedList::from_slice(&values);
    let before = list.len();

    list.push_front(7);
    let removed = list.remove_first(7);
    let visited = list.traverse();

    Ok(json!({
        "n": before,
        "inserted_then_removed": removed,
        "traversed": visited.len(),
        "order_preserved": visited == values,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_preserves_order() {
        let list = LinkedList::from_slice(&[1, 2, 3]);
        assert_eq!(list.traverse(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_first() {
        let mut list = LinkedList::from_slice(&[1, 2, 2, 3]);
        assert!(list.remove_first(2));
        assert_eq!(list.traverse(), vec![1, 2, 3]);
        assert!(!list.remove_first(99));
    }

    #[test]
    fn test_empty_list() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        assert!(!list.remove_first(1));
        assert!(list.traverse().is_empty());
    }

    #[test]
    fn test_bulk_runner() {
        let out = run_linked_list_operations(&CallArgs::none()).unwrap();
        assert_eq!(out["inserted_then_removed"], json!(true));
        assert_eq!(out["order_preserved"], json!(true));
    }
}
