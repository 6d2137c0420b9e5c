use crate::cleaner::{BatchOutcome, DeleteOutcome};
use crate::plugin::{FileItem, ScanProfile, ScanProgress, Snapshot};
use crate::tui::state::DiskUsageRow;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOrigin {
    Detail,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Descend,
    Relist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub category: String,
    pub dir: PathBuf,
    pub kind: ListingKind,
}

/// Completion events from background workers. Never dropped.
#[derive(Debug)]
pub enum AppEvent {
    ScanComplete {
        profile: ScanProfile,
        snapshot: Snapshot,
        elapsed: Duration,
    },
    Listing {
        request: ListingRequest,
        result: Result<Vec<FileItem>, String>,
    },
    DeleteOneComplete {
        category: String,
        origin: DeletionOrigin,
        outcome: DeleteOutcome,
    },
    BatchDeleteComplete {
        category: String,
        origin: DeletionOrigin,
        outcome: BatchOutcome,
    },
    DiskUsage(Result<Vec<DiskUsageRow>, String>),
}

#[derive(Debug, Clone, Default)]
pub struct ScanStatus {
    pub profile: Option<ScanProfile>,
    pub found: usize,
    pub found_size: u64,
    pub current_category: String,
    pub recent: VecDeque<String>,
    pub started: Option<Instant>,
}

impl ScanStatus {
    pub const RECENT_LIMIT: usize = 10;

    pub fn begin(profile: ScanProfile) -> Self {
        Self {
            profile: Some(profile),
            started: Some(Instant::now()),
            ..Self::default()
        }
    }

    pub fn record(&mut self, progress: ScanProgress) {
        self.found += 1;
        self.found_size += progress.size;
        self.current_category = progress.category;
        self.recent.push_back(progress.path);
        while self.recent.len() > Self::RECENT_LIMIT {
            self.recent.pop_front();
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanProgress {
    pub done: usize,
    pub total: usize,
    pub current: String,
}

#[derive(Debug, Clone, Default)]
pub struct CleanStatus {
    pub label: String,
    pub done: usize,
    pub total: usize,
    pub current: String,
    pub origin: Option<DeletionOrigin>,
    pub started: Option<Instant>,
}

impl CleanStatus {
    pub fn begin(label: String, total: usize, origin: DeletionOrigin) -> Self {
        Self {
            label,
            total,
            origin: Some(origin),
            started: Some(Instant::now()),
            ..Self::default()
        }
    }

    pub fn record(&mut self, progress: CleanProgress) {
        self.done = progress.done;
        self.total = progress.total;
        self.current = progress.current;
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.done as f64 / self.total as f64).clamp(0.0, 1.0)
        }
    }
}
