use crate::catalog::item::{Item, ResponseItems};
use crate::error::{Result, StorefrontError};
use arc_swap::ArcSwap;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Read side of the product list the search runs against.
///
/// The list is refreshed out-of-band; readers take whatever is current and
/// compare `version()` to notice that a refresh happened.
pub trait SnapshotProvider {
    fn current(&self) -> Arc<Vec<Item>>;

    fn version(&self) -> u64 {
        0
    }
}

impl<T: SnapshotProvider + ?Sized> SnapshotProvider for Arc<T> {
    fn current(&self) -> Arc<Vec<Item>> {
        (**self).current()
    }

    fn version(&self) -> u64 {
        (**self).version()
    }
}

pub struct SnapshotStore {
    items: ArcSwap<Vec<Item>>,
    version: AtomicU64,
}

impl SnapshotStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: ArcSwap::from_pointee(items),
            version: AtomicU64::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Publishes a new list and returns the version it was stored under.
    pub fn replace(&self, items: Vec<Item>) -> u64 {
        let count = items.len();
        self.items.store(Arc::new(items));
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(version, count, "catalog snapshot replaced");
        version
    }

    pub fn refresh_from(&self, path: &Path) -> Result<u64> {
        let items = load_items(path)?;
        Ok(self.replace(items))
    }

    pub fn len(&self) -> usize {
        self.items.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl SnapshotProvider for SnapshotStore {
    fn current(&self) -> Arc<Vec<Item>> {
        self.items.load_full()
    }

    fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Item>),
    Envelope(ResponseItems),
}

/// Loads items from either the API envelope (`{"items": [...]}`) or a bare array.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path).map_err(|source| StorefrontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_items(&raw).map_err(|source| StorefrontError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_items(raw: &str) -> std::result::Result<Vec<Item>, serde_json::Error> {
    let document: CatalogDocument = serde_json::from_str(raw)?;
    Ok(match document {
        CatalogDocument::Bare(items) => items,
        CatalogDocument::Envelope(response) => response.items,
    })
}

#[cfg(test)]
mod tests {
    use super::{SnapshotProvider, SnapshotStore, load_items, parse_items};
    use crate::catalog::item::Item;
    use crate::error::StorefrontError;
    use std::io::Write;

    #[test]
    fn parses_envelope_and_bare_array() {
        let envelope = parse_items(r#"{"items":[{"title":"Sun Hat"}]}"#).expect("envelope");
        assert_eq!(envelope.len(), 1);
        let bare = parse_items(r#"[{"title":"Sun Hat"},{"title":"Peacoat"}]"#).expect("bare");
        assert_eq!(bare.len(), 2);
        assert_eq!(bare[1].title, "Peacoat");
    }

    #[test]
    fn replace_bumps_version_and_keeps_old_readers_valid() {
        let store = SnapshotStore::new(vec![Item::new("Old")]);
        let before = store.current();
        assert_eq!(store.version(), 0);

        let version = store.replace(vec![Item::new("New"), Item::new("Newer")]);
        assert_eq!(version, 1);
        assert_eq!(store.version(), 1);
        assert_eq!(before[0].title, "Old");
        assert_eq!(store.current().len(), 2);
    }

    #[test]
    fn loads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"items":[{{"title":"Denim Jacket","category":"Jackets"}}]}}"#)
            .expect("write");
        let items = load_items(file.path()).expect("items");
        assert_eq!(items[0].category, "Jackets");

        let store = SnapshotStore::empty();
        assert!(store.is_empty());
        store.refresh_from(file.path()).expect("refresh");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn malformed_catalog_reports_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");
        let err = load_items(file.path()).expect_err("should fail");
        assert!(matches!(err, StorefrontError::CatalogParse { .. }));
    }
}
