//! Query resolution - maps free text to a (family, operation) pair
//!
//! Families are scanned in catalog priority order and each family's keywords
//! in declared order. A keyword matches if it occurs literally in the
//! lower-cased text, or failing that, if some whitespace token of the text is
//! within the configured edit similarity of it. The scan stops on the first
//! sufficient hit; it never looks for a globally best match.

use crate::catalog::Catalog;
use crate::core::config::EngineConfig;
use serde::Serialize;

/// Outcome of resolving one query. "No match" is a valid outcome, not an
/// error: both optional fields are simply absent.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub raw_text: String,
    /// Selected family, if any keyword of any family matched.
    pub family_id: Option<String>,
    /// Selected keyword within the family; only present when `family_id` is.
    pub operation: Option<String>,
}

/// Resolves raw query text against a catalog.
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    fuzzy_threshold: f64,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog, config: &EngineConfig) -> Self {
        Self {
            catalog,
            fuzzy_threshold: config.fuzzy_threshold,
        }
    }

    /// Resolve text to a family and operation. Pure; no side effects.
    pub fn resolve(&self, text: &str) -> Resolution {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        let family_id = self.detect_family(&lowered, &tokens);

        // Second pass: re-scan the selected family's keywords from the top.
        // This can pick a different keyword than the one that selected the
        // family (earlier keywords get another chance); intentional, see the
        // pinned test below.
        let operation = family_id.and_then(|id| {
            self.catalog
                .keywords(id)
                .and_then(|keywords| self.detect_keyword(keywords, &lowered, &tokens))
        });

        Resolution {
            raw_text: text.to_string(),
            family_id: family_id.map(String::from),
            operation: operation.map(String::from),
        }
    }

    fn detect_family(&self, lowered: &str, tokens: &[&str]) -> Option<&'static str> {
        for entry in self.catalog.families() {
            if self.detect_keyword(entry.keywords, lowered, tokens).is_some() {
                return Some(entry.id);
            }
        }
        None
    }

    /// First keyword (in declared order) that matches the text, exact
    /// substring first, then per-token fuzzy.
    fn detect_keyword(
        &self,
        keywords: &[&'static str],
        lowered: &str,
        tokens: &[&str],
    ) -> Option<&'static str> {
        keywords
            .iter()
            .find(|kw| self.keyword_matches(kw, lowered, tokens))
            .copied()
    }

    fn keyword_matches(&self, keyword: &str, lowered: &str, tokens: &[&str]) -> bool {
        if lowered.contains(keyword) {
            return true;
        }
        // Fuzzy comparison is per whitespace token, so multi-word keywords
        // ("shortest path") can only match via the literal test above.
        tokens
            .iter()
            .any(|token| strsim::normalized_levenshtein(keyword, token) >= self.fuzzy_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Resolution {
        let catalog = Catalog::standard();
        let resolver = Resolver::new(&catalog, &EngineConfig::default());
        resolver.resolve(text)
    }

    #[test]
    fn test_exact_keyword_selects_family_and_operation() {
        // No arrays vocabulary in the text ("find" would select arrays first).
        let res = resolve("shortest path in this graph");
        assert_eq!(res.family_id.as_deref(), Some("graphs"));
        // "graph" precedes "shortest path" in the graphs keyword list.
        assert_eq!(res.operation.as_deref(), Some("graph"));
    }

    #[test]
    fn test_case_insensitive() {
        let res = resolve("DIJKSTRA on a weighted GRAPH");
        assert_eq!(res.family_id.as_deref(), Some("graphs"));
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // "node" belongs to both linked_list and graphs; linked_list is
        // earlier in priority order and wins regardless of word order.
        let res = resolve("visit every node");
        assert_eq!(res.family_id.as_deref(), Some("linked_list"));
        let res = resolve("node of a vertex set");
        assert_eq!(res.family_id.as_deref(), Some("linked_list"));
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        // "sorrt" vs "sort": one edit over five chars, similarity 0.8 >= 0.75
        let res = resolve("please sorrt these numbers");
        assert_eq!(res.family_id.as_deref(), Some("sorting"));
        assert_eq!(res.operation.as_deref(), Some("sort"));
    }

    #[test]
    fn test_fuzzy_match_at_threshold_is_accepted() {
        // "srt" vs "sort": similarity exactly 0.75; the threshold is
        // inclusive.
        let res = resolve("srt them");
        assert_eq!(res.family_id.as_deref(), Some("sorting"));
    }

    #[test]
    fn test_fuzzy_match_below_threshold_is_skipped() {
        // "st" vs "sort": similarity 0.5 < 0.75, and nothing else matches.
        let res = resolve("st them");
        assert_eq!(res.family_id, None);
        assert_eq!(res.operation, None);
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let res = resolve("???");
        assert_eq!(res.family_id, None);
        assert_eq!(res.operation, None);
        assert_eq!(res.raw_text, "???");
    }

    #[test]
    fn test_operation_requires_family() {
        let res = resolve("completely unrelated words");
        assert!(res.family_id.is_none());
        assert!(res.operation.is_none());
    }

    #[test]
    fn test_second_pass_restarts_from_top_of_keyword_list() {
        // The operation pass re-scans the selected family's keywords from
        // the top with the same exact-then-fuzzy predicate, so the first
        // sufficient keyword in declared order wins it: "dequeue" contains
        // "queue" literally, and "queue" precedes "dequeue" in the
        // stacks_queues list.
        let res = resolve("dequeue items");
        assert_eq!(res.family_id.as_deref(), Some("stacks_queues"));
        assert_eq!(res.operation.as_deref(), Some("queue"));

        let res = resolve("traverse everything");
        assert_eq!(res.family_id.as_deref(), Some("linked_list"));
        assert_eq!(res.operation.as_deref(), Some("traverse"));
    }

    #[test]
    fn test_strict_threshold_disables_typos() {
        let catalog = Catalog::standard();
        let config = EngineConfig {
            fuzzy_threshold: 1.0,
        };
        let resolver = Resolver::new(&catalog, &config);
        assert_eq!(resolver.resolve("sorrt these").family_id, None);
        // Exact containment is unaffected by the threshold.
        assert_eq!(
            resolver.resolve("sort these").family_id.as_deref(),
            Some("sorting")
        );
    }
}
