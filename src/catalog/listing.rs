use crate::catalog::item::Item;
use crate::core::search::ItemMatch;
use crate::error::StorefrontError;
use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    MostPopular,
    PriceLowToHigh,
    PriceHighToLow,
    NewestFirst,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::MostPopular,
        SortOption::PriceLowToHigh,
        SortOption::PriceHighToLow,
        SortOption::NewestFirst,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOption::MostPopular => "Most Popular",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::NewestFirst => "Newest First",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            SortOption::MostPopular => "popular",
            SortOption::PriceLowToHigh => "price-asc",
            SortOption::PriceHighToLow => "price-desc",
            SortOption::NewestFirst => "newest",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = StorefrontError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        SortOption::ALL
            .into_iter()
            .find(|option| {
                option.label().eq_ignore_ascii_case(value)
                    || option.slug().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| StorefrontError::UnknownSortOption(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn accepts(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => item.category == *name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub category: CategoryFilter,
    pub sort: SortOption,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories(items: &[Item]) -> Vec<String> {
    let mut set: IndexSet<&str> = IndexSet::with_capacity(items.len() + 1);
    set.insert(ALL_CATEGORIES);
    for item in items {
        set.insert(item.category.as_str());
    }
    set.into_iter().map(str::to_string).collect()
}

/// Filters by category and sorts, keeping each item's snapshot position as its id.
pub fn filtered_products(items: &[Item], query: &ListingQuery) -> Vec<ItemMatch> {
    let mut list: Vec<ItemMatch> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| query.category.accepts(item))
        .map(|(id, item)| ItemMatch {
            id,
            item: item.clone(),
        })
        .collect();

    match query.sort {
        SortOption::PriceLowToHigh => {
            list.sort_by(|a, b| a.item.price.total_cmp(&b.item.price));
        }
        SortOption::PriceHighToLow => {
            list.sort_by(|a, b| b.item.price.total_cmp(&a.item.price));
        }
        // Snapshot order is treated as newest-first.
        SortOption::NewestFirst => {}
        SortOption::MostPopular => {
            list.sort_by(|a, b| {
                b.item
                    .is_featured
                    .cmp(&a.item.is_featured)
                    .then_with(|| b.item.stock.cmp(&a.item.stock))
            });
        }
    }

    list
}
