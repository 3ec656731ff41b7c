//! Directory filtering and search.
//!
//! Pure functions over a borrowed entity list: no state, no allocation of
//! entities, and the input order is always preserved.

use std::collections::BTreeMap;

use morph_types::{Category, CategoryFilter, Project};
use serde::{Deserialize, Serialize};

/// Fields the search box looks at.
pub trait Searchable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> Category;
}

impl Searchable for Project {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Category {
        self.category
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn category(&self) -> Category {
        (**self).category()
    }
}

/// Current category chip and search box contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub text: String,
}

impl DirectoryQuery {
    pub fn new(category: CategoryFilter, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Search text with surrounding whitespace removed.
    pub fn needle(&self) -> &str {
        self.text.trim()
    }

    /// No category chosen and nothing typed.
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && self.needle().is_empty()
    }

    /// Both constraints hold for `entity`.
    pub fn matches<T: Searchable + ?Sized>(&self, entity: &T) -> bool {
        self.category.matches(entity.category()) && text_matches(entity, &self.needle().to_lowercase())
    }
}

/// `needle` must already be trimmed and lowercased.
fn text_matches<T: Searchable + ?Sized>(entity: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entity.name().to_lowercase().contains(needle)
        || entity.description().to_lowercase().contains(needle)
        || entity.category().label().to_lowercase().contains(needle)
}

/// Matches in original order, plus whether any filter was in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<'a, T> {
    matches: Vec<&'a T>,
    filtered: bool,
}

impl<'a, T> FilterResult<'a, T> {
    pub fn matches(&self) -> &[&'a T] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<&'a T> {
        self.matches
    }

    /// False when the query was empty and every entity passed unconditionally.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// A filter was applied and nothing matched.
    pub fn is_no_results(&self) -> bool {
        self.filtered && self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.matches.iter().copied()
    }
}

/// Narrow `entities` by category and case-insensitive text.
pub fn filter_entities<'a, T: Searchable>(
    entities: &'a [T],
    query: &DirectoryQuery,
) -> FilterResult<'a, T> {
    if query.is_unfiltered() {
        return FilterResult {
            matches: entities.iter().collect(),
            filtered: false,
        };
    }

    let needle = query.needle().to_lowercase();
    let matches = entities
        .iter()
        .filter(|e| query.category.matches(e.category()) && text_matches(*e, &needle))
        .collect();

    FilterResult {
        matches,
        filtered: true,
    }
}

/// Entity count per category for the filter chips, every category present.
pub fn category_counts<T: Searchable>(entities: &[T]) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = Category::ALL.into_iter().map(|c| (c, 0)).collect();
    for entity in entities {
        *counts.entry(entity.category()).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use morph_types::builtin_projects;

    use super::*;

    fn names<T: Searchable>(result: &FilterResult<'_, T>) -> Vec<String> {
        result.iter().map(|e| e.name().to_string()).collect()
    }

    fn pair() -> Vec<Project> {
        vec![
            Project::new("BulbaSwap", Category::DeFi, "swap"),
            Project::new("Zoo Wallet", Category::Gaming, "rewards"),
        ]
    }

    fn query(category: &str, text: &str) -> DirectoryQuery {
        DirectoryQuery::new(category.parse().unwrap(), text)
    }

    #[test]
    fn test_category_and_text_are_conjunctive() {
        let projects = pair();
        assert_eq!(names(&filter_entities(&projects, &query("DeFi", "swap"))), ["BulbaSwap"]);
        assert!(filter_entities(&projects, &query("Gaming", "swap")).is_empty());
        assert_eq!(
            names(&filter_entities(&projects, &query("All", ""))),
            ["BulbaSwap", "Zoo Wallet"]
        );
    }

    #[test]
    fn test_empty_result_is_distinct_from_unfiltered() {
        let projects = pair();
        let none = filter_entities(&projects, &query("Gaming", "swap"));
        assert!(none.is_filtered());
        assert!(none.is_no_results());

        let all = filter_entities(&projects, &query("All", "   "));
        assert!(!all.is_filtered());
        assert!(!all.is_no_results());

        let empty_list: Vec<Project> = vec![];
        let nothing = filter_entities(&empty_list, &DirectoryQuery::default());
        assert!(nothing.is_empty());
        assert!(!nothing.is_no_results());
    }

    #[test]
    fn test_text_is_case_insensitive_and_trimmed() {
        let projects = pair();
        assert_eq!(names(&filter_entities(&projects, &query("All", "  ZOO "))), ["Zoo Wallet"]);
        assert_eq!(names(&filter_entities(&projects, &query("All", "REWARD"))), ["Zoo Wallet"]);
    }

    #[test]
    fn test_text_matches_category_label() {
        let projects = builtin_projects();
        let result = filter_entities(&projects, &query("All", "infra"));
        assert_eq!(names(&result), ["MorphBridge"]);
    }

    #[test]
    fn test_category_only_preserves_order() {
        let projects = builtin_projects();
        let result = filter_entities(&projects, &query("Payment", ""));
        assert!(result.is_filtered());
        assert_eq!(names(&result), ["MorphPay", "BitStore"]);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let projects = builtin_projects();
        let q = query("All", "morph");
        let first = names(&filter_entities(&projects, &q));
        let second = names(&filter_entities(&projects, &q));
        assert_eq!(first, second);
        assert_eq!(first, ["MorphPay", "Zoo Wallet", "SocialMorph", "MorphBridge"]);
    }

    #[test]
    fn test_query_matches_single_entity() {
        let project = Project::new("BitStore", Category::Payment, "gateway");
        assert!(query("Payment", "gate").matches(&project));
        assert!(!query("DeFi", "").matches(&project));
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(&builtin_projects());
        assert_eq!(counts[&Category::Payment], 2);
        assert_eq!(counts[&Category::DeFi], 1);
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(category_counts::<Project>(&[])[&Category::Social], 0);
    }
}
