use crate::catalog::item::Item;
use crate::core::search::quick_search::QuickSearch;
use std::collections::HashSet;

pub const MAX_MATCHES: usize = 6;

/// A matched item tagged with the position it held in the scanned snapshot.
///
/// `id` is only meaningful against the snapshot that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMatch {
    pub id: usize,
    pub item: Item,
}

impl ItemMatch {
    pub fn title(&self) -> &str {
        self.item.title.as_str()
    }
}

pub fn searchable_text(item: &Item) -> String {
    format!("{} {} {}", item.title, item.description, item.category)
}

pub fn compute_matches(query: &str, items: &[Item]) -> Vec<ItemMatch> {
    compute_matches_limited(query, items, MAX_MATCHES)
}

/// Case-insensitive substring matching over title, description and category.
///
/// Results keep snapshot order, drop later items whose title already matched
/// and stop after `limit` entries. A blank query scans nothing.
pub fn compute_matches_limited(query: &str, items: &[Item], limit: usize) -> Vec<ItemMatch> {
    let query = query.trim();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let search = QuickSearch::ignore_case(query);
    let mut seen_titles: HashSet<&str> = HashSet::new();
    let mut matches = Vec::new();

    for (id, item) in items.iter().enumerate() {
        if seen_titles.contains(item.title.as_str()) {
            continue;
        }
        if !search.matches_ignore_case(&searchable_text(item)) {
            continue;
        }
        seen_titles.insert(item.title.as_str());
        matches.push(ItemMatch {
            id,
            item: item.clone(),
        });
        if matches.len() == limit {
            break;
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::{MAX_MATCHES, compute_matches, compute_matches_limited, searchable_text};
    use crate::catalog::item::Item;
    use proptest::prelude::*;

    fn titles(items: &[super::ItemMatch]) -> Vec<&str> {
        items.iter().map(|m| m.title()).collect()
    }

    fn shirts() -> Vec<Item> {
        vec![
            Item::new("Red Shirt").with_category("Tops"),
            Item::new("Blue Shirt").with_category("Tops"),
            Item::new("Red Hat").with_category("Hats"),
        ]
    }

    #[test]
    fn blank_query_returns_nothing() {
        let items = shirts();
        assert!(compute_matches("", &items).is_empty());
        assert!(compute_matches("   ", &items).is_empty());
        assert!(compute_matches("\t\n", &items).is_empty());
    }

    #[test]
    fn matches_keep_snapshot_order_and_positions() {
        let items = shirts();
        let matches = compute_matches("red", &items);
        assert_eq!(titles(&matches), vec!["Red Shirt", "Red Hat"]);
        assert_eq!(matches[0].id, 0);
        assert_eq!(matches[1].id, 2);
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        let items = shirts();
        let matches = compute_matches("  SHIRT ", &items);
        assert_eq!(titles(&matches), vec!["Red Shirt", "Blue Shirt"]);
    }

    #[test]
    fn description_and_category_participate() {
        let items = vec![
            Item::new("Peacoat").with_description("Elegant wool peacoat for formal occasions."),
            Item::new("Sun Hat").with_category("Hats"),
            Item::new("Linen Shirt").with_category("Tops"),
        ];
        assert_eq!(titles(&compute_matches("wool", &items)), vec!["Peacoat"]);
        assert_eq!(titles(&compute_matches("hats", &items)), vec!["Sun Hat"]);
    }

    #[test]
    fn query_may_span_field_boundaries() {
        let items = vec![Item::new("Canvas Cap").with_description("Durable")];
        assert_eq!(titles(&compute_matches("cap dur", &items)), vec!["Canvas Cap"]);
    }

    #[test]
    fn duplicate_titles_collapse_to_first_match() {
        let items: Vec<Item> = (0..10)
            .map(|n| Item::new("Sample Product").with_size(format!("S{n}")))
            .collect();
        let matches = compute_matches("sample", &items);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 0);
    }

    #[test]
    fn non_matching_duplicate_does_not_block_later_match() {
        let items = vec![
            Item::new("Wool Beanie").with_description("Warm"),
            Item::new("Wool Beanie").with_description("Knitted"),
        ];
        let matches = compute_matches("knit", &items);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 1);
    }

    #[test]
    fn results_are_capped_in_original_order() {
        let items: Vec<Item> = (0..8).map(|n| Item::new(format!("Jacket {n}"))).collect();
        let matches = compute_matches("jacket", &items);
        assert_eq!(matches.len(), MAX_MATCHES);
        let ids: Vec<usize> = matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        assert!(compute_matches_limited("red", &shirts(), 0).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let items = shirts();
        assert_eq!(compute_matches("shirt", &items), compute_matches("shirt", &items));
    }

    #[test]
    fn searchable_text_joins_fields_with_spaces() {
        let item = Item::new("Cap").with_description("Canvas").with_category("Hats");
        assert_eq!(searchable_text(&item), "Cap Canvas Hats");
        assert_eq!(searchable_text(&Item::default()), "  ");
    }

    proptest! {
        #[test]
        fn membership_agrees_with_naive_filter(
            query in "[a-c ]{1,3}",
            item_titles in proptest::collection::vec("[a-d ]{0,8}", 0..12),
        ) {
            let items: Vec<Item> = item_titles.iter().map(Item::new).collect();
            let matches = compute_matches_limited(&query, &items, usize::MAX);
            let needle = query.trim().to_lowercase();

            let mut seen = std::collections::HashSet::new();
            let mut expected = Vec::new();
            if !needle.is_empty() {
                for (idx, item) in items.iter().enumerate() {
                    if seen.contains(&item.title) {
                        continue;
                    }
                    if searchable_text(item).to_lowercase().contains(&needle) {
                        seen.insert(item.title.clone());
                        expected.push(idx);
                    }
                }
            }
            let actual: Vec<usize> = matches.iter().map(|m| m.id).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
