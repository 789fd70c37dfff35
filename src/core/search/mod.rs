pub mod matcher;
pub mod quick_search;

pub use matcher::{ItemMatch, MAX_MATCHES, compute_matches, compute_matches_limited};
pub use quick_search::{QuickSearch, contains_ignore_case};
