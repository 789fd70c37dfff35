use crate::catalog::item::{Item, ProductKey};
use crate::catalog::snapshot::SnapshotProvider;
use crate::core::search::{ItemMatch, MAX_MATCHES, compute_matches_limited};
use crate::runtime::scheduler::{Scheduler, SchedulerCommand};
use crate::state::highlight::{Direction, Highlight};
use std::time::{Duration, Instant};

pub const COMMIT_KEY: &str = "search.commit";
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Commit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Typing,
    Showing,
}

/// What navigation receives when a match is chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub id: usize,
    pub key: ProductKey,
    pub item: Item,
}

impl Selection {
    pub fn from_match(chosen: ItemMatch) -> Self {
        Self {
            key: ProductKey::for_item(&chosen.item, chosen.id),
            id: chosen.id,
            item: chosen.item,
        }
    }
}

/// Receives selections. Called once per selection and never awaited.
pub trait Router {
    fn navigate(&mut self, selection: Selection);
}

impl Router for Vec<Selection> {
    fn navigate(&mut self, selection: Selection) {
        self.push(selection);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub quiet_window: Duration,
    pub max_matches: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quiet_window: DEFAULT_QUIET_WINDOW,
            max_matches: MAX_MATCHES,
        }
    }
}

/// Debounced search over a catalog snapshot with keyboard selection.
///
/// Keystrokes update the raw query immediately and (re)arm a single commit
/// timer. When the timer fires on `tick`, the committed query is matched
/// against whatever snapshot is current at that moment and the highlight
/// resets. The match list and highlight are always recomputed from the
/// committed query and snapshot, never edited directly.
pub struct SearchSession<P: SnapshotProvider, R: Router> {
    provider: P,
    router: R,
    config: SessionConfig,
    raw_query: String,
    committed_query: String,
    matches: Vec<ItemMatch>,
    highlight: Highlight,
    snapshot_version: u64,
    scheduler: Scheduler<SessionEvent>,
    active: bool,
}

impl<P: SnapshotProvider, R: Router> SearchSession<P, R> {
    pub fn new(provider: P, router: R) -> Self {
        Self::with_config(provider, router, SessionConfig::default())
    }

    pub fn with_config(provider: P, router: R, config: SessionConfig) -> Self {
        let snapshot_version = provider.version();
        Self {
            provider,
            router,
            config,
            raw_query: String::new(),
            committed_query: String::new(),
            matches: Vec::new(),
            highlight: Highlight::None,
            snapshot_version,
            scheduler: Scheduler::new(),
            active: true,
        }
    }

    /// Re-arms a disposed session with empty state.
    pub fn start(&mut self) {
        self.reset();
        self.snapshot_version = self.provider.version();
        self.active = true;
    }

    /// Cancels the pending commit and stops reacting to input.
    pub fn dispose(&mut self) {
        if !self.active {
            return;
        }
        self.reset();
        self.active = false;
        tracing::debug!("search session disposed");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    pub fn matches(&self) -> &[ItemMatch] {
        &self.matches
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn highlighted(&self) -> Option<&ItemMatch> {
        self.highlight
            .valid_for(self.matches.len())
            .and_then(|idx| self.matches.get(idx))
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    pub fn phase(&self) -> SearchPhase {
        if self.scheduler.is_pending(COMMIT_KEY) {
            SearchPhase::Typing
        } else if self.committed_query.trim().is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Showing
        }
    }

    /// How long the owner may sleep before `tick` has work to do.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.scheduler.poll_timeout(now, idle)
    }

    pub fn on_raw_input(&mut self, value: impl Into<String>, now: Instant) {
        if !self.active {
            return;
        }
        let value = value.into();
        self.raw_query.clone_from(&value);
        self.scheduler.schedule(
            SchedulerCommand::Debounce {
                key: COMMIT_KEY,
                delay: self.config.quiet_window,
                event: SessionEvent::Commit(value),
            },
            now,
        );
    }

    /// Fires due commits and picks up snapshot refreshes. Returns whether the
    /// match list or highlight changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        let mut changed = false;
        for event in self.scheduler.drain_ready(now) {
            match event {
                SessionEvent::Commit(value) => {
                    self.commit(value);
                    changed = true;
                }
            }
        }
        changed |= self.sync_snapshot();
        changed
    }

    /// Moves the highlight one row. Returns `true` when the key was consumed.
    pub fn on_directional(&mut self, direction: Direction) -> bool {
        if !self.active || self.matches.is_empty() {
            return false;
        }
        self.highlight = self.highlight.step(direction, self.matches.len());
        true
    }

    /// Selects the highlighted match, or the only match when nothing is
    /// highlighted. Returns whether a selection was emitted.
    pub fn on_commit(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let chosen = match self.highlight.valid_for(self.matches.len()) {
            Some(idx) => self.matches.get(idx).cloned(),
            None if self.matches.len() == 1 => self.matches.first().cloned(),
            None => None,
        };
        match chosen {
            Some(chosen) => {
                self.select_item(chosen);
                true
            }
            None => false,
        }
    }

    pub fn on_cancel(&mut self) {
        self.reset();
    }

    pub fn select_item(&mut self, chosen: ItemMatch) {
        self.reset();
        let selection = Selection::from_match(chosen);
        tracing::info!(
            id = selection.id,
            key = %selection.key,
            title = %selection.item.title,
            "search selection"
        );
        self.router.navigate(selection);
    }

    fn commit(&mut self, value: String) {
        tracing::debug!(query = %value, "search query committed");
        self.committed_query = value;
        self.recompute();
    }

    fn sync_snapshot(&mut self) -> bool {
        let version = self.provider.version();
        if version == self.snapshot_version {
            return false;
        }
        tracing::debug!(
            from = self.snapshot_version,
            to = version,
            "snapshot changed under search"
        );
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        // Version first: a refresh racing these reads must still compare newer.
        self.snapshot_version = self.provider.version();
        let snapshot = self.provider.current();
        self.matches =
            compute_matches_limited(&self.committed_query, &snapshot, self.config.max_matches);
        self.highlight = Highlight::None;
    }

    fn reset(&mut self) {
        self.scheduler.cancel(COMMIT_KEY);
        self.raw_query.clear();
        self.committed_query.clear();
        self.matches.clear();
        self.highlight = Highlight::None;
    }
}

impl<P: SnapshotProvider, R: Router> Drop for SearchSession<P, R> {
    fn drop(&mut self) {
        self.dispose();
    }
}
