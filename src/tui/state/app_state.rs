use crate::config::Config;
use crate::plugin::{ProbeRegistry, ScanProgress};
use crate::scanner::default_registry;
use crate::tui::state::{
    AppEvent, AppMode, CleanProgress, CleanStatus, DiskUsageState, ListingRequest, ResultModel,
    ScanStatus,
};
use glob::Pattern;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

pub struct App {
    pub config: Config,
    pub home: PathBuf,
    pub registry: ProbeRegistry,
    pub excluded: Vec<Pattern>,
    pub mode: AppMode,
    pub menu_selected: usize,
    pub results_selected: usize,
    pub model: ResultModel,
    pub scan_status: ScanStatus,
    pub clean_status: CleanStatus,
    pub disk_usage: DiskUsageState,
    /// The listing the detail view is waiting for, if any.
    pub pending_listing: Option<ListingRequest>,
    /// Last deletion summary, shown on the detail and results screens.
    pub message: Option<String>,
    /// User-actionable failure, shown as a banner until the next key press.
    pub error: Option<String>,
    pub should_quit: bool,
    pub events_tx: Sender<AppEvent>,
    pub events_rx: Receiver<AppEvent>,
    pub scan_progress: Option<Receiver<ScanProgress>>,
    pub clean_progress: Option<Receiver<CleanProgress>>,
}

impl App {
    pub fn new(config: Config, home: PathBuf) -> Self {
        let registry = default_registry(&home, &config.scan);
        Self::with_registry(config, home, registry)
    }

    pub fn with_registry(config: Config, home: PathBuf, registry: ProbeRegistry) -> Self {
        let excluded = config.scan.exclude_patterns().unwrap_or_else(|e| {
            tracing::warn!("ignoring excluded_paths: {e}");
            Vec::new()
        });
        let (events_tx, events_rx) = channel();

        Self {
            config,
            home,
            registry,
            excluded,
            mode: AppMode::Menu,
            menu_selected: 0,
            results_selected: 0,
            model: ResultModel::default(),
            scan_status: ScanStatus::default(),
            clean_status: CleanStatus::default(),
            disk_usage: DiskUsageState::default(),
            pending_listing: None,
            message: None,
            error: None,
            should_quit: false,
            events_tx,
            events_rx,
            scan_progress: None,
            clean_progress: None,
        }
    }
}
