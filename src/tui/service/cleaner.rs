use crate::cleaner::DeletionEngine;
use crate::plugin::FileItem;
use crate::safety::SafetyChecker;
use crate::tui::state::{AppEvent, CleanProgress, DeletionOrigin};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::{sync_channel, Receiver, Sender};
use std::thread;

pub const CLEAN_PROGRESS_BUFFER: usize = 64;

pub struct DeleteJob {
    pub category: String,
    pub origin: DeletionOrigin,
    pub home: PathBuf,
    pub events: Sender<AppEvent>,
}

impl DeleteJob {
    fn engine(&self) -> DeletionEngine {
        DeletionEngine::new(SafetyChecker::new(Some(self.home.clone())))
    }
}

pub fn start_delete_one(job: DeleteJob, item: FileItem) {
    thread::spawn(move || {
        let outcome = job.engine().delete_one(&item.path);
        let _ = job.events.send(AppEvent::DeleteOneComplete {
            category: job.category,
            origin: job.origin,
            outcome,
        });
    });
}

pub fn start_delete_marked(
    job: DeleteJob,
    marked: HashSet<PathBuf>,
    listing: Vec<FileItem>,
) -> Receiver<CleanProgress> {
    let (progress_tx, progress_rx) = sync_channel(CLEAN_PROGRESS_BUFFER);

    thread::spawn(move || {
        let outcome = job.engine().delete_marked(&marked, &listing, |done, total, path| {
            let _ = progress_tx.try_send(CleanProgress {
                done,
                total,
                current: path.display().to_string(),
            });
        });
        tracing::info!(
            category = %job.category,
            removed = outcome.removed.len(),
            bytes = outcome.freed,
            elapsed_ms = outcome.duration.as_millis() as u64,
            "batch delete finished"
        );
        let _ = job.events.send(AppEvent::BatchDeleteComplete {
            category: job.category,
            origin: job.origin,
            outcome,
        });
    });

    progress_rx
}
