use crate::catalog::snapshot::{SnapshotStore, load_items};
use crate::error::{Result, StorefrontError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

/// Reloads a catalog file into a store when its modification time changes.
pub struct FileProbe {
    path: PathBuf,
    last_modified: SystemTime,
}

impl FileProbe {
    /// Loads the catalog into a new store, recording the mtime before the
    /// read so a write that lands during loading is reloaded by `check`.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, SnapshotStore)> {
        let path = path.into();
        let last_modified = modified_at(&path)?;
        let store = SnapshotStore::new(load_items(&path)?);
        Ok((
            Self {
                path,
                last_modified,
            },
            store,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the new snapshot version when a reload happened.
    pub fn check(&mut self, store: &SnapshotStore) -> Result<Option<u64>> {
        let modified = modified_at(&self.path)?;
        if self.last_modified == modified {
            return Ok(None);
        }
        let version = store.refresh_from(&self.path)?;
        self.last_modified = modified;
        Ok(Some(version))
    }
}

fn modified_at(path: &Path) -> Result<SystemTime> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| StorefrontError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Background thread polling a `FileProbe`. Stops when dropped.
pub struct CatalogWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CatalogWatcher {
    pub fn spawn(store: Arc<SnapshotStore>, mut probe: FileProbe, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !thread_stop.load(Ordering::Acquire) {
                thread::park_timeout(interval);
                if thread_stop.load(Ordering::Acquire) {
                    break;
                }
                match probe.check(&store) {
                    Ok(Some(version)) => {
                        tracing::info!(version, path = %probe.path().display(), "catalog reloaded");
                    }
                    Ok(None) => {}
                    Err(err) => tracing::warn!(%err, "catalog reload failed"),
                }
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl Drop for CatalogWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
