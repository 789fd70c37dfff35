use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum SchedulerCommand<E> {
    Debounce {
        key: &'static str,
        delay: Duration,
        event: E,
    },
}

#[derive(Debug, Clone)]
struct DelayedTask<E> {
    due_at: Instant,
    key: &'static str,
    event: E,
}

/// Keyed timer queue driven by caller-supplied instants.
///
/// At most one task is queued per key: debouncing a key replaces whatever
/// was pending for it, and cancelling drops it. Nothing fires on its own;
/// the owner calls `drain_ready` from its loop.
#[derive(Debug)]
pub struct Scheduler<E> {
    delayed: Vec<DelayedTask<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            delayed: Vec::new(),
        }
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand<E>, now: Instant) {
        match command {
            SchedulerCommand::Debounce { key, delay, event } => {
                if self.cancel(key) {
                    tracing::trace!(key, "superseded pending task");
                }
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    key,
                    event,
                });
            }
        }
    }

    /// Drops the pending task for `key`, reporting whether one existed.
    pub fn cancel(&mut self, key: &str) -> bool {
        let before = self.delayed.len();
        self.delayed.retain(|task| task.key != key);
        self.delayed.len() != before
    }

    pub fn clear(&mut self) {
        self.delayed.clear();
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.delayed.iter().any(|task| task.key == key)
    }

    pub fn pending_len(&self) -> usize {
        self.delayed.len()
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<E> {
        let mut ready = Vec::new();
        let mut idx = 0usize;
        while idx < self.delayed.len() {
            if self.delayed[idx].due_at <= now {
                let task = self.delayed.swap_remove(idx);
                ready.push((task.due_at, task.event));
            } else {
                idx += 1;
            }
        }

        ready.sort_by_key(|(due_at, _)| *due_at);
        ready.into_iter().map(|(_, event)| event).collect()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;

        for task in &self.delayed {
            let due_in = task.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }

        next
    }
}
