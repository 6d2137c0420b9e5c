use crate::scanner::list_directory;
use crate::tui::state::{AppEvent, ListingRequest};
use std::sync::mpsc::Sender;
use std::thread;

/// Lists one directory level in the background.
pub fn start_listing(request: ListingRequest, events: Sender<AppEvent>) {
    thread::spawn(move || {
        let result = list_directory(&request.dir).map_err(|e| {
            tracing::warn!(dir = %request.dir.display(), "listing failed: {e}");
            e.to_string()
        });
        let _ = events.send(AppEvent::Listing { request, result });
    });
}
