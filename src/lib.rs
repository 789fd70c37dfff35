pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use app::StorefrontApp;
pub use catalog::{Item, ProductKey, SnapshotProvider, SnapshotStore};
pub use config::SearchConfig;
pub use core::search::{ItemMatch, compute_matches};
pub use error::{Result, StorefrontError};
pub use state::{Router, SearchPhase, SearchSession, Selection};
