use crate::plugin::{run_scan, ProbeContext, ProbeRegistry, ProgressSink, ScanProfile, ScanProgress};
use crate::tui::state::{AppEvent, AppMode, ScanStatus};
use glob::Pattern;
use std::sync::mpsc::{sync_channel, Receiver, Sender};
use std::thread;
use std::time::Instant;

/// Progress updates beyond this many unread ones are dropped.
pub const PROGRESS_BUFFER: usize = 100;

pub struct ScanStartParams<'a> {
    pub registry: &'a ProbeRegistry,
    pub excluded: &'a [Pattern],
    pub profile: ScanProfile,
    pub events: &'a Sender<AppEvent>,
    pub scan_status: &'a mut ScanStatus,
    pub scan_progress: &'a mut Option<Receiver<ScanProgress>>,
    pub mode: &'a mut AppMode,
}

/// Launches the probes of `profile` in the background and switches to the
/// scanning screen. Completion arrives as `AppEvent::ScanComplete`.
pub fn start_scan(params: &mut ScanStartParams) {
    if *params.mode == AppMode::Scanning {
        return;
    }

    let probes = params.registry.probes_for(params.profile);
    let (progress_tx, progress_rx) = sync_channel(PROGRESS_BUFFER);
    let ctx = ProbeContext::new(params.excluded.to_vec(), ProgressSink::new(progress_tx));
    let events = params.events.clone();
    let profile = params.profile;

    tracing::info!(profile = profile.label(), probes = probes.len(), "scan started");
    thread::spawn(move || {
        let started = Instant::now();
        let snapshot = run_scan(&probes, &ctx);
        let _ = events.send(AppEvent::ScanComplete {
            profile,
            snapshot,
            elapsed: started.elapsed(),
        });
    });

    *params.scan_status = ScanStatus::begin(profile);
    *params.scan_progress = Some(progress_rx);
    *params.mode = AppMode::Scanning;
}

pub fn poll_scan_progress(receiver: &Option<Receiver<ScanProgress>>, status: &mut ScanStatus) {
    if let Some(rx) = receiver {
        while let Ok(progress) = rx.try_recv() {
            status.record(progress);
        }
    }
}
