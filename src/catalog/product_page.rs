use crate::catalog::item::{Item, ProductKey};
use crate::core::search::ItemMatch;
use crate::error::{Result, StorefrontError};
use crate::state::highlight::{Direction, Highlight};

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    pub key: ProductKey,
    pub title: String,
    pub size: String,
    pub quantity: u32,
    pub total: f64,
}

/// Detail view for one product title and its variants (sizes, prices).
#[derive(Debug, Clone)]
pub struct ProductPage {
    title: String,
    variants: Vec<ItemMatch>,
    selected: Option<usize>,
    quantity: u32,
}

impl ProductPage {
    pub fn for_title(items: &[Item], title: &str) -> Self {
        let variants = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.title == title)
            .map(|(id, item)| ItemMatch {
                id,
                item: item.clone(),
            })
            .collect();
        Self {
            title: title.to_string(),
            variants,
            selected: None,
            quantity: 1,
        }
    }

    /// Opens the page for a chosen match with that exact variant preselected.
    pub fn for_match(items: &[Item], chosen: &ItemMatch) -> Self {
        let mut page = Self::for_title(items, &chosen.item.title);
        page.select_variant(chosen.id);
        page
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn variants(&self) -> &[ItemMatch] {
        &self.variants
    }

    pub fn selected(&self) -> Option<&ItemMatch> {
        self.selected.and_then(|idx| self.variants.get(idx))
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selects the variant at snapshot position `id`, lowering the quantity
    /// to what that variant has in stock.
    pub fn select_variant(&mut self, id: usize) -> bool {
        let Some(idx) = self.variants.iter().position(|variant| variant.id == id) else {
            return false;
        };
        self.selected = Some(idx);
        let stock = self.available_stock();
        if stock < self.quantity {
            self.quantity = stock;
        }
        true
    }

    /// Moves the variant selection one row, clamped at both ends.
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let current = match self.selected {
            Some(idx) => Highlight::Row(idx),
            None => Highlight::None,
        };
        let Some(next) = current.step(direction, self.variants.len()).index() else {
            return false;
        };
        let id = self.variants[next].id;
        self.select_variant(id)
    }

    pub fn available_stock(&self) -> u32 {
        self.selected().map(|variant| variant.item.stock).unwrap_or(0)
    }

    pub fn increment(&mut self) -> bool {
        if self.quantity < self.available_stock() {
            self.quantity += 1;
            return true;
        }
        false
    }

    pub fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;
            return true;
        }
        false
    }

    /// Price times quantity, rounded to cents.
    pub fn total_cost(&self) -> f64 {
        let Some(variant) = self.selected() else {
            return 0.0;
        };
        (variant.item.price * f64::from(self.quantity) * 100.0).round() / 100.0
    }

    pub fn purchase_request(&self) -> Result<PurchaseRequest> {
        let variant = self
            .selected()
            .ok_or_else(|| StorefrontError::InvalidSelection("no variant selected".to_string()))?;
        if self.quantity == 0 {
            return Err(StorefrontError::InvalidSelection(format!(
                "'{}' is out of stock",
                variant.item.title
            )));
        }
        Ok(PurchaseRequest {
            key: ProductKey::for_item(&variant.item, variant.id),
            title: variant.item.title.clone(),
            size: variant.item.size.clone(),
            quantity: self.quantity,
            total: self.total_cost(),
        })
    }
}
