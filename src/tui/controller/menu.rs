use super::Command;
use crate::tui::logic::{navigate_down, navigate_up};
use crate::tui::state::MenuEntry;
use crossterm::event::KeyCode;

pub struct MenuContext<'a> {
    pub selected: &'a mut usize,
    pub disk_usage_loading: bool,
}

pub fn handle_menu_key(ctx: &mut MenuContext, code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => navigate_up(ctx.selected),
        KeyCode::Down | KeyCode::Char('j') => navigate_down(ctx.selected, MenuEntry::ALL.len()),
        KeyCode::Enter => {
            let entry = MenuEntry::ALL.get(*ctx.selected).copied()?;
            if let Some(profile) = entry.profile() {
                return Some(Command::StartScan(profile));
            }
            return match entry {
                MenuEntry::DiskUsage if !ctx.disk_usage_loading => Some(Command::ShowDiskUsage),
                MenuEntry::Exit => Some(Command::Quit),
                _ => None,
            };
        }
        _ => {}
    }
    None
}
