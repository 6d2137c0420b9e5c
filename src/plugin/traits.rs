use glob::Pattern;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{SyncSender, TrySendError};

/// One filesystem entry considered for cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
    pub age_days: Option<u32>,
}

impl FileItem {
    pub fn new(path: PathBuf, name: impl Into<String>, size: u64) -> Self {
        Self {
            path,
            name: name.into(),
            size,
            is_dir: false,
            age_days: None,
        }
    }

    pub fn with_dir(mut self, is_dir: bool) -> Self {
        self.is_dir = is_dir;
        self
    }

    pub fn with_age_days(mut self, days: u32) -> Self {
        self.age_days = Some(days);
        self
    }

    pub fn with_size(&self, size: u64) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

/// One category's findings. `total` always equals the sum of item sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub category: String,
    items: Vec<FileItem>,
    total: u64,
}

impl ScanResult {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn with_items(category: impl Into<String>, items: Vec<FileItem>) -> Self {
        let mut result = Self::new(category);
        for item in items {
            result.push(item);
        }
        result
    }

    pub fn push(&mut self, item: FileItem) {
        self.total += item.size;
        self.items.push(item);
    }

    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies removals of `(path, freed_bytes)` pairs.
    ///
    /// Returns the amount the category total went down. See [`prune_removed`].
    pub fn apply_removals(&mut self, removed: &[(PathBuf, u64)]) -> u64 {
        let before = self.total;
        prune_removed(&mut self.items, removed);
        self.total = self.items.iter().map(|i| i.size).sum();
        before.saturating_sub(self.total)
    }
}

/// Drops every item at or below a removed path. A directory item that
/// contains a removed path is replaced with a copy shrunk by the freed bytes.
pub fn prune_removed(items: &mut Vec<FileItem>, removed: &[(PathBuf, u64)]) {
    for (path, freed) in removed {
        items.retain(|i| !i.path.starts_with(path));
        for item in items
            .iter_mut()
            .filter(|i| i.is_dir && path.starts_with(&i.path))
        {
            *item = item.with_size(item.size.saturating_sub(*freed));
        }
    }
}

/// Best-effort progress report emitted while a probe runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanProgress {
    pub category: String,
    pub path: String,
    pub size: u64,
}

/// Non-blocking progress sender; a full buffer drops the update.
#[derive(Debug, Clone, Default)]
pub struct ProgressSink {
    tx: Option<SyncSender<ScanProgress>>,
}

impl ProgressSink {
    pub fn new(tx: SyncSender<ScanProgress>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn report(&self, category: &str, path: &str, size: u64) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };
        match tx.try_send(ScanProgress {
            category: category.to_string(),
            path: path.to_string(),
            size,
        }) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Shared, read-only inputs handed to every probe of a scan.
#[derive(Debug, Clone, Default)]
pub struct ProbeContext {
    pub excluded: Vec<Pattern>,
    pub progress: ProgressSink,
}

impl ProbeContext {
    pub fn new(excluded: Vec<Pattern>, progress: ProgressSink) -> Self {
        Self { excluded, progress }
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|p| p.matches_path(path))
    }
}

/// An independent scan routine producing one category's findings.
///
/// Implementations swallow access errors and return whatever they found.
pub trait CategoryProbe: Send + Sync {
    fn category(&self) -> &str;
    fn scan(&self, ctx: &ProbeContext) -> ScanResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::sync_channel;

    fn item(path: &str, size: u64) -> FileItem {
        FileItem::new(PathBuf::from(path), path, size)
    }

    #[test]
    fn test_push_keeps_total_in_sync() {
        let result = ScanResult::with_items("Cache", vec![item("/a", 10), item("/b", 20)]);
        assert_eq!(result.total(), 30);
        assert_eq!(result.items().len(), 2);
    }

    #[test]
    fn test_removing_root_item() {
        let mut result =
            ScanResult::with_items("Cache", vec![item("/p1", 10), item("/p2", 20), item("/p3", 5)]);
        let dropped = result.apply_removals(&[(PathBuf::from("/p2"), 20)]);
        assert_eq!(dropped, 20);
        assert_eq!(result.total(), 15);
        assert!(result.items().iter().all(|i| i.path != Path::new("/p2")));
    }

    #[test]
    fn test_removing_nested_path_shrinks_ancestor() {
        let mut result = ScanResult::with_items(
            "Node Modules",
            vec![item("/proj/node_modules", 100).with_dir(true), item("/other", 7)],
        );
        let dropped = result.apply_removals(&[(PathBuf::from("/proj/node_modules/left-pad"), 40)]);
        assert_eq!(dropped, 40);
        assert_eq!(result.items()[0].size, 60);
        assert_eq!(result.total(), 67);
    }

    #[test]
    fn test_removing_directory_drops_items_below_it() {
        let mut result = ScanResult::with_items(
            "Homebrew Cache",
            vec![
                item("/lib/Caches/Homebrew/downloads", 1000).with_dir(true),
                item("/lib/Caches/Homebrew/api", 24).with_dir(true),
                item("/lib/Caches/HomebrewX", 5),
            ],
        );
        let dropped = result.apply_removals(&[(PathBuf::from("/lib/Caches/Homebrew"), 1024)]);
        assert_eq!(dropped, 1024);
        assert_eq!(result.items().len(), 1);
        assert_eq!(result.items()[0].path, PathBuf::from("/lib/Caches/HomebrewX"));
    }

    #[test]
    fn test_unknown_path_changes_nothing() {
        let mut result = ScanResult::with_items("Logs", vec![item("/a.log", 3)]);
        assert_eq!(result.apply_removals(&[(PathBuf::from("/zzz"), 3)]), 0);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_progress_sink_drops_when_full() {
        let (tx, rx) = sync_channel(1);
        let sink = ProgressSink::new(tx);
        assert!(sink.report("Cache", "/a", 1));
        assert!(!sink.report("Cache", "/b", 2));
        assert_eq!(rx.try_recv().unwrap().path, "/a");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_disabled_sink_reports_nothing() {
        assert!(!ProgressSink::disabled().report("Cache", "/a", 1));
    }

    #[test]
    fn test_context_exclusion() {
        let ctx = ProbeContext::new(
            vec![Pattern::new("/home/*/keep/**").unwrap()],
            ProgressSink::disabled(),
        );
        assert!(ctx.is_excluded(Path::new("/home/me/keep/x")));
        assert!(!ctx.is_excluded(Path::new("/home/me/other")));
    }
}
