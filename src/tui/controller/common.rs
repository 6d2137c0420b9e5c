use crate::tui::logic::{navigate_down, navigate_up};
use crate::tui::state::{AppMode, DiskUsageState};
use crossterm::event::KeyCode;

pub struct DiskUsageContext<'a> {
    pub disk_usage: &'a mut DiskUsageState,
    pub mode: &'a mut AppMode,
}

/// Quit on the report returns to the menu instead of exiting.
pub fn handle_disk_usage_key(ctx: &mut DiskUsageContext, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => navigate_up(&mut ctx.disk_usage.selected),
        KeyCode::Down | KeyCode::Char('j') => {
            navigate_down(&mut ctx.disk_usage.selected, ctx.disk_usage.rows.len())
        }
        KeyCode::Esc | KeyCode::Char('q') => *ctx.mode = AppMode::Menu,
        _ => {}
    }
}
