use crate::cleaner::DeleteOutcome;
use crate::tui::controller::{
    handle_detail_key, handle_disk_usage_key, handle_menu_key, handle_results_key, Command,
    DetailContext, DiskUsageContext, MenuContext, ResultsContext,
};
use crate::tui::service::cleaner::{start_delete_marked, start_delete_one, DeleteJob};
use crate::tui::service::disk::start_disk_usage;
use crate::tui::service::explorer::start_listing;
use crate::tui::service::scanner::{poll_scan_progress, start_scan, ScanStartParams};
use crate::tui::state::{
    App, AppEvent, AppMode, CleanStatus, DeletionOrigin, ListingKind, ListingRequest,
};
use crate::tui::view::render;
use crate::utils::format_size;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

impl App {
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        let tick = Duration::from_millis(self.config.ui.tick_rate_ms.max(1));

        while !self.should_quit {
            self.poll_progress();
            self.drain_events();

            terminal.draw(|f| render(f, self))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_progress(&mut self) {
        poll_scan_progress(&self.scan_progress, &mut self.scan_status);
        if let Some(rx) = &self.clean_progress {
            while let Ok(progress) = rx.try_recv() {
                self.clean_status.record(progress);
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        self.error = None;

        let command = match self.mode {
            AppMode::DiskUsage => {
                let mut ctx = DiskUsageContext {
                    disk_usage: &mut self.disk_usage,
                    mode: &mut self.mode,
                };
                handle_disk_usage_key(&mut ctx, code);
                None
            }
            _ if code == KeyCode::Char('q') => Some(Command::Quit),
            AppMode::Scanning | AppMode::Cleaning => None,
            AppMode::Menu => {
                let mut ctx = MenuContext {
                    selected: &mut self.menu_selected,
                    disk_usage_loading: self.disk_usage.loading,
                };
                handle_menu_key(&mut ctx, code)
            }
            AppMode::Results => {
                let mut ctx = ResultsContext {
                    selected: &mut self.results_selected,
                    model: &mut self.model,
                    mode: &mut self.mode,
                };
                handle_results_key(&mut ctx, code)
            }
            AppMode::Detail => {
                let mut ctx = DetailContext {
                    model: &mut self.model,
                    mode: &mut self.mode,
                    page_size: self.config.ui.page_size.max(1),
                    listing_pending: self.pending_listing.is_some(),
                };
                let command = handle_detail_key(&mut ctx, code);
                if self.mode != AppMode::Detail {
                    self.pending_listing = None;
                }
                command
            }
        };

        if let Some(command) = command {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        tracing::debug!(?command, mode = ?self.mode, "command");
        match command {
            Command::Quit => self.should_quit = true,
            Command::StartScan(profile) => {
                self.message = None;
                let mut params = ScanStartParams {
                    registry: &self.registry,
                    excluded: &self.excluded,
                    profile,
                    events: &self.events_tx,
                    scan_status: &mut self.scan_status,
                    scan_progress: &mut self.scan_progress,
                    mode: &mut self.mode,
                };
                start_scan(&mut params);
            }
            Command::ShowDiskUsage => {
                if self.disk_usage.loading {
                    return;
                }
                self.disk_usage.loading = true;
                self.disk_usage.selected = 0;
                self.mode = AppMode::DiskUsage;
                start_disk_usage(self.events_tx.clone());
            }
            Command::Explore(dir) => self.request_listing(dir, ListingKind::Descend),
            Command::Relist(dir) => self.request_listing(dir, ListingKind::Relist),
            Command::DeleteOne(item) => {
                let Some(job) = self.delete_job(DeletionOrigin::Detail) else {
                    return;
                };
                self.clean_status = CleanStatus::begin(item.name.clone(), 1, DeletionOrigin::Detail);
                self.mode = AppMode::Cleaning;
                start_delete_one(job, item);
            }
            Command::DeleteMarked => {
                let marked = self.model.marked().clone();
                let listing = self.model.listing().to_vec();
                let count = listing.iter().filter(|i| marked.contains(&i.path)).count();
                if count == 0 {
                    return;
                }
                let Some(job) = self.delete_job(DeletionOrigin::Detail) else {
                    return;
                };
                self.clean_status =
                    CleanStatus::begin(format!("{count} items"), count, DeletionOrigin::Detail);
                self.clean_progress = Some(start_delete_marked(job, marked, listing));
                self.mode = AppMode::Cleaning;
            }
            Command::CleanCategory(category) => {
                let Some(items) = self
                    .model
                    .snapshot()
                    .get(&category)
                    .map(|r| r.items().to_vec())
                else {
                    return;
                };
                if items.is_empty() || self.mode == AppMode::Cleaning {
                    return;
                }
                let marked: HashSet<PathBuf> = items.iter().map(|i| i.path.clone()).collect();
                let job = DeleteJob {
                    category: category.clone(),
                    origin: DeletionOrigin::Results,
                    home: self.home.clone(),
                    events: self.events_tx.clone(),
                };
                self.clean_status =
                    CleanStatus::begin(category, items.len(), DeletionOrigin::Results);
                self.clean_progress = Some(start_delete_marked(job, marked, items));
                self.mode = AppMode::Cleaning;
            }
        }
    }

    fn delete_job(&self, origin: DeletionOrigin) -> Option<DeleteJob> {
        if self.mode == AppMode::Cleaning {
            return None;
        }
        let category = self.model.active_category()?.to_string();
        Some(DeleteJob {
            category,
            origin,
            home: self.home.clone(),
            events: self.events_tx.clone(),
        })
    }

    fn request_listing(&mut self, dir: PathBuf, kind: ListingKind) {
        let Some(category) = self.model.active_category().map(str::to_string) else {
            return;
        };
        let request = ListingRequest {
            category,
            dir,
            kind,
        };
        self.pending_listing = Some(request.clone());
        start_listing(request, self.events_tx.clone());
    }

    /// Folds one background completion into the state.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ScanComplete {
                profile,
                snapshot,
                elapsed,
            } => {
                tracing::info!(
                    profile = profile.label(),
                    categories = snapshot.len(),
                    bytes = snapshot.grand_total(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "scan finished"
                );
                self.scan_progress = None;
                self.pending_listing = None;
                self.model.load_snapshot(snapshot);
                self.results_selected = 0;
                self.mode = AppMode::Results;
            }
            AppEvent::Listing { request, result } => {
                if self.pending_listing.as_ref() != Some(&request) {
                    tracing::debug!(dir = %request.dir.display(), "stale listing dropped");
                    return;
                }
                self.pending_listing = None;
                match result {
                    Ok(children) => match request.kind {
                        ListingKind::Descend => {
                            if self.model.active_category() == Some(request.category.as_str()) {
                                self.model.apply_explore(request.dir, children);
                            }
                        }
                        ListingKind::Relist => {
                            self.model.apply_relist(&request.dir, children);
                        }
                    },
                    Err(e) => {
                        self.message =
                            Some(format!("Cannot open {}: {e}", display_name(&request.dir)));
                    }
                }
            }
            AppEvent::DeleteOneComplete {
                category,
                origin,
                outcome,
            } => {
                self.message = Some(match &outcome {
                    DeleteOutcome::Removed { path, freed } => {
                        format!("Deleted {} ({})", display_name(path), format_size(*freed))
                    }
                    DeleteOutcome::AlreadyGone { path } => {
                        format!("{} was already gone", display_name(path))
                    }
                    DeleteOutcome::Failed { path, reason } => {
                        format!("Could not delete {}: {reason}", display_name(path))
                    }
                });
                if let Some(removal) = outcome.removal() {
                    self.model.apply_deletion(&[removal]);
                }
                self.finish_cleaning(origin, &category);
            }
            AppEvent::BatchDeleteComplete {
                category,
                origin,
                outcome,
            } => {
                self.model.apply_deletion(&outcome.removed);
                self.message = Some(format!(
                    "Deleted {} items ({})",
                    outcome.removed.len(),
                    format_size(outcome.freed)
                ));
                self.finish_cleaning(origin, &category);
            }
            AppEvent::DiskUsage(result) => {
                self.disk_usage.loading = false;
                match result {
                    Ok(rows) => {
                        self.disk_usage.rows = rows;
                        self.disk_usage.selected = 0;
                    }
                    Err(e) => {
                        self.error = Some(format!("Disk usage report failed: {e}"));
                        if self.mode == AppMode::DiskUsage {
                            self.mode = AppMode::Menu;
                        }
                    }
                }
            }
        }
    }

    fn finish_cleaning(&mut self, origin: DeletionOrigin, category: &str) {
        self.clean_progress = None;
        self.clean_status = CleanStatus::default();

        for emptied in self.model.remove_empty_categories() {
            tracing::debug!(category, %emptied, "category emptied");
        }
        self.results_selected = self.results_selected.min(self.model.snapshot().len());

        self.mode = match origin {
            DeletionOrigin::Detail if self.model.active_category().is_some() => AppMode::Detail,
            _ => AppMode::Results,
        };
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
