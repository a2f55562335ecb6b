use crate::models::{DiaryStats, Entry};
use crate::reducer::{transition, DiaryAction};
use crate::stats::build_stats;
use std::{mem, sync::Arc};
use tokio::sync::Mutex;

/// The one place diary state lives: the entry list, the id allocator, and
/// the memoized statistics. Everything mutates through [`DiaryData::apply`].
#[derive(Debug, Default)]
pub struct DiaryData {
    entries: Vec<Entry>,
    next_id: u64,
    stats_cache: Option<(usize, DiaryStats)>,
}

impl DiaryData {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Hands out the next entry id. Ids only ever grow; removing an entry
    /// never returns its id to the pool.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Runs one action through the transition function and keeps the result.
    pub fn apply(&mut self, action: DiaryAction) {
        self.entries = transition(mem::take(&mut self.entries), action);
    }

    /// Returns the mood statistics, recomputing only when the entry count
    /// has changed since the last call. A content edit keeps the count and
    /// therefore serves the cached value.
    pub fn stats(&mut self) -> DiaryStats {
        if let Some((len, cached)) = &self.stats_cache {
            if *len == self.entries.len() {
                return cached.clone();
            }
        }

        let fresh = build_stats(&self.entries);
        self.stats_cache = Some((self.entries.len(), fresh.clone()));
        fresh
    }
}

#[derive(Clone, Default)]
pub struct AppState {
    pub data: Arc<Mutex<DiaryData>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
