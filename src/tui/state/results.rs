use crate::plugin::{prune_removed, FileItem, ScanResult, Snapshot};
use crate::scanner::sort_by_size;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Outcome of stepping one breadcrumb level up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoUp {
    /// Already at the category root.
    Rejected,
    /// Back at the category root; the listing was restored in place.
    Root,
    /// The parent directory must be listed again.
    Relist(PathBuf),
}

/// The current snapshot plus where the user is inside it and what is marked.
///
/// Marks are cleared whenever the listing is replaced.
#[derive(Debug, Default)]
pub struct ResultModel {
    snapshot: Snapshot,
    active: Option<String>,
    listing: Vec<FileItem>,
    breadcrumb: Vec<String>,
    trail: Vec<PathBuf>,
    marked: HashSet<PathBuf>,
    cursor: usize,
}

impl ResultModel {
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        *self = Self {
            snapshot,
            ..Self::default()
        };
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_result(&self) -> Option<&ScanResult> {
        self.active.as_deref().and_then(|c| self.snapshot.get(c))
    }

    pub fn listing(&self) -> &[FileItem] {
        &self.listing
    }

    pub fn listing_total(&self) -> u64 {
        self.listing.iter().map(|i| i.size).sum()
    }

    pub fn breadcrumb(&self) -> &[String] {
        &self.breadcrumb
    }

    pub fn depth(&self) -> usize {
        self.breadcrumb.len()
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.trail.last().map(|p| p.as_path())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused(&self) -> Option<&FileItem> {
        self.listing.get(self.cursor)
    }

    pub fn marked(&self) -> &HashSet<PathBuf> {
        &self.marked
    }

    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.contains(path)
    }

    pub fn marked_size(&self) -> u64 {
        self.listing
            .iter()
            .filter(|i| self.marked.contains(&i.path))
            .map(|i| i.size)
            .sum()
    }

    pub fn enter_category(&mut self, name: &str) -> bool {
        let Some(result) = self.snapshot.get(name) else {
            return false;
        };
        let mut items = result.items().to_vec();
        sort_by_size(&mut items);

        self.active = Some(name.to_string());
        self.breadcrumb = vec![name.to_string()];
        self.trail.clear();
        self.replace_listing(items);
        true
    }

    pub fn leave_category(&mut self) {
        self.active = None;
        self.breadcrumb.clear();
        self.trail.clear();
        self.replace_listing(Vec::new());
    }

    /// Directory the focused item points at, if it can be explored.
    pub fn explore_target(&self) -> Option<PathBuf> {
        self.focused()
            .filter(|item| item.is_dir)
            .map(|item| item.path.clone())
    }

    /// Descends into `dir`, whose immediate children were just listed.
    pub fn apply_explore(&mut self, dir: PathBuf, children: Vec<FileItem>) -> bool {
        if self.active.is_none() {
            return false;
        }
        let segment = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| dir.display().to_string());
        self.breadcrumb.push(segment);
        self.trail.push(dir);
        self.replace_listing(children);
        true
    }

    pub fn go_up(&mut self) -> GoUp {
        if self.breadcrumb.len() <= 1 {
            return GoUp::Rejected;
        }
        self.breadcrumb.pop();
        self.trail.pop();

        match self.trail.last().cloned() {
            Some(parent) => {
                self.replace_listing(Vec::new());
                GoUp::Relist(parent)
            }
            None => {
                let mut items = self
                    .active_result()
                    .map(|r| r.items().to_vec())
                    .unwrap_or_default();
                sort_by_size(&mut items);
                self.replace_listing(items);
                GoUp::Root
            }
        }
    }

    /// Fills in the listing after a `GoUp::Relist`, if the user is still there.
    pub fn apply_relist(&mut self, dir: &Path, children: Vec<FileItem>) -> bool {
        if self.current_dir() != Some(dir) {
            return false;
        }
        self.replace_listing(children);
        true
    }

    pub fn toggle_mark(&mut self, path: &Path) -> bool {
        if !self.listing.iter().any(|i| i.path == path) {
            return false;
        }
        if !self.marked.remove(path) {
            self.marked.insert(path.to_path_buf());
        }
        true
    }

    pub fn toggle_focused(&mut self) -> bool {
        match self.focused().map(|i| i.path.clone()) {
            Some(path) => self.toggle_mark(&path),
            None => false,
        }
    }

    pub fn mark_all(&mut self) {
        self.marked = self.listing.iter().map(|i| i.path.clone()).collect();
    }

    pub fn clear_marks(&mut self) {
        self.marked.clear();
    }

    pub fn move_up(&mut self, step: usize) {
        self.cursor = self.cursor.saturating_sub(step);
    }

    pub fn move_down(&mut self, step: usize) {
        let last = self.listing.len().saturating_sub(1);
        self.cursor = (self.cursor + step).min(last);
    }

    /// Feeds finished deletions back in. Every category loses the removed
    /// paths and anything below them, whether or not it is open. Returns the
    /// bytes dropped from the grand total.
    pub fn apply_deletion(&mut self, removed: &[(PathBuf, u64)]) -> u64 {
        let dropped = self.snapshot.apply_removals(removed);

        if self.active.is_some() {
            prune_removed(&mut self.listing, removed);
            self.marked
                .retain(|m| !removed.iter().any(|(p, _)| m.starts_with(p)));
            self.clamp_cursor();
        }
        dropped
    }

    /// Drops every category whose items were all deleted. Leaves the detail
    /// view if the open category was one of them.
    pub fn remove_empty_categories(&mut self) -> Vec<String> {
        let removed = self.snapshot.remove_empty();
        if let Some(active) = self.active.as_deref() {
            if removed.iter().any(|name| name == active) {
                self.leave_category();
            }
        }
        removed
    }

    fn replace_listing(&mut self, items: Vec<FileItem>) {
        self.listing = items;
        self.marked.clear();
        self.cursor = 0;
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.listing.len().saturating_sub(1));
    }
}
