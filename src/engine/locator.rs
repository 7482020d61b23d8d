//! Implementation locator - precedence chain over a family's symbol table
//!
//! Given an optional operation hint, candidate names are tried in a fixed
//! order and the first registered callable wins:
//!
//! 1. the hint verbatim
//! 2. the hint with spaces replaced by underscores
//! 3. `run_<hint_with_underscores>`
//! 4. `run_<family_id>_operations` (the family's bulk entry point)
//! 5. `run_operations` (global fallback, if the family registers one)

use crate::registry::{AlgoFn, FamilyTable};

/// Tagged outcome of a locate attempt.
pub enum Located {
    Found { name: String, func: AlgoFn },
    NotFound,
}

impl Located {
    pub fn is_found(&self) -> bool {
        matches!(self, Located::Found { .. })
    }
}

/// Find the callable for an operation hint within one family. Pure lookup.
pub fn locate(family: &FamilyTable, operation_hint: Option<&str>) -> Located {
    let mut candidates: Vec<String> = Vec::new();

    if let Some(hint) = operation_hint {
        let underscored = hint.replace(' ', "_");
        candidates.push(hint.to_string());
        candidates.push(underscored.clone());
        candidates.push(format!("run_{underscored}"));
    }
    candidates.push(format!("run_{}_operations", family.id()));
    candidates.push("run_operations".to_string());

    for name in candidates {
        if let Some(func) = family.get(&name) {
            return Located::Found { name, func };
        }
    }
    Located::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CallArgs, RegistryBuilder};
    use serde_json::{json, Value};

    fn one(_: &CallArgs) -> Result<Value, crate::registry::AlgoError> {
        Ok(json!(1))
    }
    fn two(_: &CallArgs) -> Result<Value, crate::registry::AlgoError> {
        Ok(json!(2))
    }

    fn table(symbols: Vec<(&'static str, crate::registry::AlgoFn)>) -> crate::registry::Registry {
        let mut builder = RegistryBuilder::new();
        builder.register_family("demo", symbols);
        builder.build()
    }

    #[test]
    fn test_exact_name_beats_bulk_runner() {
        let registry = table(vec![("run_demo_operations", two), ("bfs", one)]);
        let family = registry.family("demo").unwrap();
        match locate(family, Some("bfs")) {
            Located::Found { name, func } => {
                assert_eq!(name, "bfs");
                assert_eq!(func(&CallArgs::none()).unwrap(), json!(1));
            }
            Located::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_spaces_become_underscores() {
        let registry = table(vec![("shortest_path", one)]);
        let family = registry.family("demo").unwrap();
        match locate(family, Some("shortest path")) {
            Located::Found { name, .. } => assert_eq!(name, "shortest_path"),
            Located::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_run_prefixed_hint() {
        let registry = table(vec![("run_coin_change", one)]);
        let family = registry.family("demo").unwrap();
        match locate(family, Some("coin change")) {
            Located::Found { name, .. } => assert_eq!(name, "run_coin_change"),
            Located::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_bulk_runner_when_hint_misses() {
        let registry = table(vec![("run_demo_operations", two)]);
        let family = registry.family("demo").unwrap();
        match locate(family, Some("nonexistent")) {
            Located::Found { name, .. } => assert_eq!(name, "run_demo_operations"),
            Located::NotFound => panic!("expected bulk runner"),
        }
    }

    #[test]
    fn test_bulk_runner_without_hint() {
        let registry = table(vec![("run_demo_operations", two)]);
        let family = registry.family("demo").unwrap();
        assert!(locate(family, None).is_found());
    }

    #[test]
    fn test_global_fallback() {
        let registry = table(vec![("run_operations", one)]);
        let family = registry.family("demo").unwrap();
        match locate(family, Some("whatever")) {
            Located::Found { name, .. } => assert_eq!(name, "run_operations"),
            Located::NotFound => panic!("expected global fallback"),
        }
    }

    #[test]
    fn test_not_found() {
        let registry = table(vec![("bfs", one)]);
        let family = registry.family("demo").unwrap();
        assert!(!locate(family, Some("dfs")).is_found());
        assert!(!locate(family, None).is_found());
    }
}
