pub mod item;
pub mod listing;
pub mod product_page;
pub mod snapshot;
pub mod watcher;

pub use item::{Item, ProductKey, ResponseItems};
pub use listing::{CategoryFilter, ListingQuery, SortOption, categories, filtered_products};
pub use product_page::{ProductPage, PurchaseRequest};
pub use snapshot::{SnapshotProvider, SnapshotStore, load_items};
pub use watcher::{CatalogWatcher, FileProbe};
