use super::Command;
use crate::tui::logic::{navigate_down, navigate_up};
use crate::tui::state::{AppMode, ResultModel};
use crossterm::event::KeyCode;

pub struct ResultsContext<'a> {
    pub selected: &'a mut usize,
    pub model: &'a mut ResultModel,
    pub mode: &'a mut AppMode,
}

/// Rows are the categories in display order followed by a "back" row.
pub fn handle_results_key(ctx: &mut ResultsContext, code: KeyCode) -> Option<Command> {
    let names = ctx.model.snapshot().names();

    match code {
        KeyCode::Up | KeyCode::Char('k') => navigate_up(ctx.selected),
        KeyCode::Down | KeyCode::Char('j') => navigate_down(ctx.selected, names.len() + 1),
        KeyCode::Enter => match names.get(*ctx.selected) {
            Some(name) => {
                if ctx.model.enter_category(name) {
                    *ctx.mode = AppMode::Detail;
                }
            }
            None => *ctx.mode = AppMode::Menu,
        },
        KeyCode::Esc => *ctx.mode = AppMode::Menu,
        KeyCode::Char('c') => {
            return names.get(*ctx.selected).cloned().map(Command::CleanCategory);
        }
        _ => {}
    }
    None
}
