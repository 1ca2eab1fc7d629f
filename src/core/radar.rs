//! Visibility-aware filtering and grouping over the skill radar
//!
//! Pure derivation layer driving both the public view and the workshop:
//! - Mode gate (private items exist only for the workshop)
//! - Case-insensitive substring search over names and tags
//! - Category selection with an "all" wildcard
//! - Summary counters and category/status groupings
//!
//! Every function takes a snapshot of the item sequence plus the caller's
//! criteria and returns a fresh ordered sequence. Nothing here retains
//! state or touches the store.

use crate::core::{Category, SkillItem, Status, Visibility};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// Category selector: a concrete category or the "all" wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    One(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::One(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::core::CoreError;

    fn from_str(s: &str) -> crate::core::Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::One(s.parse()?))
        }
    }
}

/// Filter criteria supplied by the caller on every keystroke, toggle or
/// selector change
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Workshop mode: private items stay in the derived view
    pub admin: bool,
    /// Free-text search; empty matches everything
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    pub fn public() -> Self {
        FilterCriteria::default()
    }

    pub fn admin() -> Self {
        FilterCriteria {
            admin: true,
            ..FilterCriteria::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::One(category);
        self
    }
}

/// Summary counters over a derived view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RadarStats {
    pub total: usize,
    pub active: usize,
    pub learning: usize,
}

/// Per-status counters for the workshop board header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub learning: usize,
    pub assess: usize,
    pub archive: usize,
}

impl StatusCounts {
    pub fn of(&self, status: Status) -> usize {
        match status {
            Status::Active => self.active,
            Status::Learning => self.learning,
            Status::Assess => self.assess,
            Status::Archive => self.archive,
        }
    }
}

/// The three "Technical Arsenal" columns and the disjoint category subsets
/// that drive them
pub const ARSENAL_COLUMNS: [(&str, &[Category]); 3] = [
    ("Data & AI Engineering", &[Category::DataEngineering]),
    (
        "Cloud & Infrastructure",
        &[Category::Devops, Category::Tools],
    ),
    (
        "Languages & Core",
        &[Category::Languages, Category::Business, Category::SoftSkills],
    ),
];

/// Derive the visible subset for the given criteria.
///
/// The result preserves the relative order of `items`; identical inputs
/// always yield the identical sequence. An unknown category selector never
/// reaches this function (it fails to parse at the boundary), but a
/// selector that matches nothing simply yields an empty view.
pub fn visible_items(items: &[SkillItem], criteria: &FilterCriteria) -> Vec<SkillItem> {
    let needle = criteria.query.to_lowercase();

    let derived: Vec<SkillItem> = items
        .iter()
        .filter(|item| criteria.admin || item.visibility == Visibility::Public)
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.tags.iter().any(|tag| tag.contains(&needle))
        })
        .filter(|item| criteria.category.matches(item.category))
        .cloned()
        .collect();

    debug!(
        "Derived view: {} of {} items (admin={}, query={:?})",
        derived.len(),
        items.len(),
        criteria.admin,
        criteria.query
    );

    derived
}

/// Aggregate counters over a visible set. Empty input yields all zeros.
pub fn radar_stats(visible: &[SkillItem]) -> RadarStats {
    RadarStats {
        total: visible.len(),
        active: visible.iter().filter(|i| i.status == Status::Active).count(),
        learning: visible
            .iter()
            .filter(|i| i.status == Status::Learning)
            .count(),
    }
}

/// Per-status counters over a visible set
pub fn status_counts(visible: &[SkillItem]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for item in visible {
        match item.status {
            Status::Active => counts.active += 1,
            Status::Learning => counts.learning += 1,
            Status::Assess => counts.assess += 1,
            Status::Archive => counts.archive += 1,
        }
    }
    counts
}

/// Retain items whose category is in `categories` and whose status is
/// exactly active. An empty result means the caller renders nothing for
/// that group.
pub fn active_in_categories(visible: &[SkillItem], categories: &[Category]) -> Vec<SkillItem> {
    visible
        .iter()
        .filter(|item| categories.contains(&item.category) && item.status == Status::Active)
        .cloned()
        .collect()
}

/// The slice of a visible set sitting in one board column
pub fn by_status(visible: &[SkillItem], status: Status) -> Vec<SkillItem> {
    visible
        .iter()
        .filter(|item| item.status == status)
        .cloned()
        .collect()
}

/// Return a new sequence with the matching entry's visibility flipped.
///
/// An unknown id is a silent no-op: ids only ever originate from entries
/// the caller already rendered, so there is nothing to report.
pub fn toggle_visibility(items: &[SkillItem], id: &str) -> Vec<SkillItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                let mut flipped = item.clone();
                flipped.visibility = item.visibility.flipped();
                flipped
            } else {
                item.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: Category, status: Status, tags: &[&str]) -> SkillItem {
        SkillItem {
            id: id.to_string(),
            name: name.to_string(),
            category,
            status,
            visibility: Visibility::Public,
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> Vec<SkillItem> {
        vec![
            item("1", "Python", Category::Languages, Status::Active, &["core"]),
            item(
                "2",
                "Databricks",
                Category::DataEngineering,
                Status::Active,
                &["platform", "big-data"],
            ),
            item("3", "Terraform", Category::Devops, Status::Learning, &["iac"]),
            item("4", "Scrum", Category::Business, Status::Archive, &["management"]),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let items = sample();
        let view = visible_items(&items, &FilterCriteria::public());
        assert_eq!(view.len(), items.len());
    }

    #[test]
    fn test_output_preserves_input_order() {
        let items = sample();
        // "a" hits Databricks and Terraform by name, Scrum via its tag
        let view = visible_items(&items, &FilterCriteria::public().with_query("a"));
        let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "4"]);
    }

    #[test]
    fn test_tag_match_uses_lowercased_query() {
        let items = sample();
        let view = visible_items(&items, &FilterCriteria::public().with_query("BIG-DATA"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "2");
    }

    #[test]
    fn test_category_filter() {
        let items = sample();
        let view = visible_items(
            &items,
            &FilterCriteria::public().with_category(Category::Devops),
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Terraform");
    }

    #[test]
    fn test_category_filter_parses_wildcard() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "devops".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::One(Category::Devops)
        );
        assert!("warehouse".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_stats_on_empty_view() {
        assert_eq!(radar_stats(&[]), RadarStats::default());
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&sample());
        assert_eq!(counts.active, 2);
        assert_eq!(counts.learning, 1);
        assert_eq!(counts.assess, 0);
        assert_eq!(counts.archive, 1);
        assert_eq!(counts.of(Status::Archive), 1);
    }

    #[test]
    fn test_group_only_returns_active() {
        let groups = active_in_categories(&sample(), &[Category::Devops, Category::Business]);
        assert!(groups.iter().all(|i| i.status == Status::Active));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_toggle_is_involution_for_any_id() {
        let items = sample();
        for id in ["1", "4", "no-such-id"] {
            let twice = toggle_visibility(&toggle_visibility(&items, id), id);
            assert_eq!(twice, items);
        }
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let items = sample();
        assert_eq!(toggle_visibility(&items, "999"), items);
    }

    #[test]
    fn test_arsenal_columns_are_disjoint() {
        let mut seen = Vec::new();
        for (_, categories) in ARSENAL_COLUMNS {
            for category in categories {
                assert!(!seen.contains(category));
                seen.push(*category);
            }
        }
        assert_eq!(seen.len(), Category::ALL.len());
    }
}
