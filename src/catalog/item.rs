use serde::{Deserialize, Serialize};
use std::fmt;

/// A product record as served by the catalog API.
///
/// Every field defaults when absent so partially filled records still
/// participate in search with empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub size: String,
    pub image_url: String,
    pub stock: u32,
    pub is_featured: bool,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Identity handed to navigation when an item is chosen.
///
/// Records that carry a persistent `_id` keep it; otherwise the position in
/// the snapshot that produced the match stands in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductKey {
    Stable(String),
    Position(usize),
}

impl ProductKey {
    pub fn for_item(item: &Item, position: usize) -> Self {
        match &item.id {
            Some(id) if !id.is_empty() => ProductKey::Stable(id.clone()),
            _ => ProductKey::Position(position),
        }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKey::Stable(id) => f.write_str(id),
            ProductKey::Position(position) => write!(f, "{position}"),
        }
    }
}

/// Envelope returned by `GET /api/products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseItems {
    pub items: Vec<Item>,
}
