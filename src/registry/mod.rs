//! Read-only registry of algorithm callables
//!
//! Maps each family id to an ordered table of named callables. The registry
//! is assembled once at process start through [`RegistryBuilder`] and frozen;
//! there is no register/unregister surface after construction, so lookups
//! need no locking and `dispatch` is safe to call concurrently.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::families;

/// Arguments forwarded to an algorithm callable.
///
/// Callables have arbitrary logical signatures; the engine forwards whatever
/// the caller supplied, positionally and by keyword, as JSON values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub keyword: serde_json::Map<String, Value>,
}

impl CallArgs {
    /// No arguments at all (the bulk runners accept this).
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_positional(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: serde_json::Map::new(),
        }
    }

    /// Optional unsigned keyword argument.
    pub fn u64_kw(&self, key: &str) -> Result<Option<u64>, AlgoError> {
        match self.keyword.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_u64()
                .map(Some)
                .ok_or_else(|| AlgoError::InvalidArgument(format!("'{key}' must be an integer"))),
        }
    }

    /// Required integer array at a positional index.
    pub fn ints_at(&self, index: usize) -> Result<Vec<i64>, AlgoError> {
        let value = self.positional.get(index).ok_or_else(|| {
            AlgoError::InvalidArgument(format!("missing positional argument {index}"))
        })?;
        let items = value.as_array().ok_or_else(|| {
            AlgoError::InvalidArgument(format!("positional argument {index} must be an array"))
        })?;
        items
            .iter()
            .map(|v| {
                v.as_i64().ok_or_else(|| {
                    AlgoError::InvalidArgument(format!(
                        "positional argument {index} must contain only integers"
                    ))
                })
            })
            .collect()
    }

    /// Required integer at a positional index.
    pub fn int_at(&self, index: usize) -> Result<i64, AlgoError> {
        self.positional
            .get(index)
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                AlgoError::InvalidArgument(format!("missing integer positional argument {index}"))
            })
    }
}

/// Faults an algorithm body can raise.
///
/// The executor captures these into the execution record; they never escape
/// `dispatch`. The variant name doubles as the fault `kind` string.
#[derive(Error, Debug)]
pub enum AlgoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index out of range: {0}")]
    IndexRange(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("{0}")]
    Failed(String),
}

impl AlgoError {
    pub fn kind(&self) -> &'static str {
        match self {
            AlgoError::InvalidArgument(_) => "InvalidArgument",
            AlgoError::IndexRange(_) => "IndexRange",
            AlgoError::DivisionByZero => "DivisionByZero",
            AlgoError::Failed(_) => "Failed",
        }
    }
}

/// Signature shared by every registered callable.
pub type AlgoFn = fn(&CallArgs) -> Result<Value, AlgoError>;

/// Ordered table of named callables for one family.
#[derive(Clone)]
pub struct FamilyTable {
    id: String,
    symbols: Vec<(&'static str, AlgoFn)>,
}

impl FamilyTable {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Exact-name lookup. The table only ever holds callables, so a hit is
    /// always invocable.
    pub fn get(&self, name: &str) -> Option<AlgoFn> {
        self.symbols
            .iter()
            .find(|(symbol, _)| *symbol == name)
            .map(|(_, func)| *func)
    }

    pub fn symbol_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symbols.iter().map(|(name, _)| *name)
    }
}

/// Immutable family-id → callable-table mapping.
pub struct Registry {
    families: HashMap<String, FamilyTable>,
}

impl Registry {
    /// Registry covering every standard family.
    pub fn standard() -> Self {
        let mut builder = RegistryBuilder::new();
        builder.register_family("arrays", families::arrays::symbols());
        builder.register_family("linked_list", families::linked_list::symbols());
        builder.register_family("stacks_queues", families::stacks_queues::symbols());
        builder.register_family("hashing", families::hashing::symbols());
        builder.register_family("trees", families::trees::symbols());
        builder.register_family("graphs", families::graphs::symbols());
        builder.register_family("sorting", families::sorting::symbols());
        builder.register_family("divide_conquer", families::divide_conquer::symbols());
        builder.register_family(
            "dynamic_programming",
            families::dynamic_programming::symbols(),
        );
        builder.register_family("greedy", families::greedy::symbols());
        builder.build()
    }

    pub fn family(&self, family_id: &str) -> Option<&FamilyTable> {
        self.families.get(family_id)
    }

    pub fn family_ids(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }
}

/// Assembles a [`Registry`]; consumed by `build`, after which the mapping is
/// frozen.
pub struct RegistryBuilder {
    families: HashMap<String, FamilyTable>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            families: HashMap::new(),
        }
    }

    pub fn register_family(&mut self, id: &str, symbols: Vec<(&'static str, AlgoFn)>) {
        self.families.insert(
            id.to_string(),
            FamilyTable {
                id: id.to_string(),
                symbols,
            },
        );
    }

    pub fn build(self) -> Registry {
        Registry {
            families: self.families,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_covers_all_families() {
        let registry = Registry::standard();
        for id in [
            "arrays",
            "linked_list",
            "stacks_queues",
            "hashing",
            "trees",
            "graphs",
            "sorting",
            "divide_conquer",
            "dynamic_programming",
            "greedy",
        ] {
            let table = registry.family(id).unwrap_or_else(|| panic!("missing {id}"));
            let bulk = format!("run_{id}_operations");
            assert!(
                table.symbol_names().any(|n| n == bulk),
                "{id} lacks bulk runner"
            );
        }
    }

    #[test]
    fn test_unknown_family_is_none() {
        let registry = Registry::standard();
        assert!(registry.family("quantum").is_none());
    }

    #[test]
    fn test_call_args_int_extraction() {
        let args = CallArgs::with_positional(vec![serde_json::json!([3, 1, 2])]);
        assert_eq!(args.ints_at(0).unwrap(), vec![3, 1, 2]);
        assert!(args.ints_at(1).is_err());
        assert!(args.int_at(0).is_err());
    }

    #[test]
    fn test_call_args_keyword_extraction() {
        let mut args = CallArgs::none();
        args.keyword
            .insert("n".to_string(), serde_json::json!(100));
        assert_eq!(args.u64_kw("n").unwrap(), Some(100));
        assert_eq!(args.u64_kw("seed").unwrap(), None);

        args.keyword
            .insert("bad".to_string(), serde_json::json!("x"));
        assert!(args.u64_kw("bad").is_err());
    }
}
