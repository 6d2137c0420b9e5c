pub mod components;
pub mod screens;

use crate::tui::state::{App, AppMode};
use components::modal::render_error_modal;
use ratatui::Frame;

pub use screens::{
    render_cleaning, render_detail, render_disk_usage, render_menu, render_results,
    render_scanning,
};

/// Draws the screen for the current mode. Never mutates the app.
pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Menu => render_menu(f, app.menu_selected),
        AppMode::Scanning => render_scanning(f, &app.scan_status),
        AppMode::Results => render_results(f, &app.model, app.results_selected, app.message.as_deref()),
        AppMode::Detail => render_detail(f, app),
        AppMode::Cleaning => render_cleaning(f, &app.clean_status),
        AppMode::DiskUsage => render_disk_usage(f, &app.disk_usage),
    }

    if let Some(error) = &app.error {
        render_error_modal(f, error);
    }
}
