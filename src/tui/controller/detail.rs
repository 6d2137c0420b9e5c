use super::Command;
use crate::tui::state::{AppMode, GoUp, ResultModel};
use crossterm::event::KeyCode;

pub struct DetailContext<'a> {
    pub model: &'a mut ResultModel,
    pub mode: &'a mut AppMode,
    pub page_size: usize,
    /// A directory listing is in flight; navigation that replaces the listing waits.
    pub listing_pending: bool,
}

pub fn handle_detail_key(ctx: &mut DetailContext, code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => ctx.model.move_up(1),
        KeyCode::Down | KeyCode::Char('j') => ctx.model.move_down(1),
        KeyCode::PageUp => ctx.model.move_up(ctx.page_size),
        KeyCode::PageDown => ctx.model.move_down(ctx.page_size),
        KeyCode::Home => ctx.model.move_up(usize::MAX),
        KeyCode::End => ctx.model.move_down(usize::MAX),
        KeyCode::Esc => {
            ctx.model.leave_category();
            *ctx.mode = AppMode::Menu;
        }
        KeyCode::Char(' ') => {
            ctx.model.toggle_focused();
        }
        KeyCode::Char('A') => ctx.model.mark_all(),
        KeyCode::Char('N') => ctx.model.clear_marks(),
        _ if ctx.listing_pending => {}
        KeyCode::Enter => return ctx.model.explore_target().map(Command::Explore),
        KeyCode::Backspace => match ctx.model.go_up() {
            GoUp::Rejected => {
                ctx.model.leave_category();
                *ctx.mode = AppMode::Results;
            }
            GoUp::Root => {}
            GoUp::Relist(dir) => return Some(Command::Relist(dir)),
        },
        KeyCode::Char('D') if !ctx.model.marked().is_empty() => return Some(Command::DeleteMarked),
        KeyCode::Char('c') => return ctx.model.focused().cloned().map(Command::DeleteOne),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{FileItem, ScanResult, Snapshot};
    use std::path::{Path, PathBuf};

    fn model() -> ResultModel {
        let mut snapshot = Snapshot::default();
        snapshot.insert(ScanResult::with_items(
            "Node Modules",
            vec![
                FileItem::new(PathBuf::from("/w/a/node_modules"), "a", 30).with_dir(true),
                FileItem::new(PathBuf::from("/w/b/node_modules"), "b", 20).with_dir(true),
                FileItem::new(PathBuf::from("/w/c.tgz"), "c", 10),
            ],
        ));
        let mut model = ResultModel::default();
        model.load_snapshot(snapshot);
        model.enter_category("Node Modules");
        model
    }

    fn ctx<'a>(model: &'a mut ResultModel, mode: &'a mut AppMode, pending: bool) -> DetailContext<'a> {
        DetailContext {
            model,
            mode,
            page_size: 2,
            listing_pending: pending,
        }
    }

    #[test]
    fn test_enter_on_directory_requests_explore() {
        let mut model = model();
        let mut mode = AppMode::Detail;
        let mut ctx = ctx(&mut model, &mut mode, false);
        assert_eq!(
            handle_detail_key(&mut ctx, KeyCode::Enter),
            Some(Command::Explore(PathBuf::from("/w/a/node_modules")))
        );
        handle_detail_key(&mut ctx, KeyCode::End);
        assert_eq!(handle_detail_key(&mut ctx, KeyCode::Enter), None);
    }

    #[test]
    fn test_backspace_at_root_goes_to_results() {
        let mut model = model();
        let mut mode = AppMode::Detail;
        let mut ctx = ctx(&mut model, &mut mode, false);
        assert_eq!(handle_detail_key(&mut ctx, KeyCode::Backspace), None);
        assert_eq!(mode, AppMode::Results);
        assert!(model.active_category().is_none());
    }

    #[test]
    fn test_escape_goes_to_menu() {
        let mut model = model();
        let mut mode = AppMode::Detail;
        let mut ctx = ctx(&mut model, &mut mode, false);
        handle_detail_key(&mut ctx, KeyCode::Esc);
        assert_eq!(mode, AppMode::Menu);
    }

    #[test]
    fn test_marking_keys() {
        let mut model = model();
        let mut mode = AppMode::Detail;
        let mut ctx = ctx(&mut model, &mut mode, false);
        assert_eq!(handle_detail_key(&mut ctx, KeyCode::Char('D')), None);
        handle_detail_key(&mut ctx, KeyCode::Char(' '));
        assert!(ctx.model.is_marked(Path::new("/w/a/node_modules")));
        assert_eq!(handle_detail_key(&mut ctx, KeyCode::Char('D')), Some(Command::DeleteMarked));
        handle_detail_key(&mut ctx, KeyCode::Char('A'));
        assert_eq!(ctx.model.marked().len(), 3);
        handle_detail_key(&mut ctx, KeyCode::Char('N'));
        assert!(ctx.model.marked().is_empty());
    }

    #[test]
    fn test_delete_selected_and_paging() {
        let mut model = model();
        let mut mode = AppMode::Detail;
        let mut ctx = ctx(&mut model, &mut mode, false);
        handle_detail_key(&mut ctx, KeyCode::PageDown);
        assert_eq!(ctx.model.cursor(), 2);
        handle_detail_key(&mut ctx, KeyCode::PageUp);
        assert_eq!(ctx.model.cursor(), 0);
        match handle_detail_key(&mut ctx, KeyCode::Char('c')) {
            Some(Command::DeleteOne(item)) => assert_eq!(item.name, "a"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pending_listing_blocks_listing_changes() {
        let mut model = model();
        let mut mode = AppMode::Detail;
        let mut ctx = ctx(&mut model, &mut mode, true);
        assert_eq!(handle_detail_key(&mut ctx, KeyCode::Enter), None);
        assert_eq!(handle_detail_key(&mut ctx, KeyCode::Char('c')), None);
        assert_eq!(handle_detail_key(&mut ctx, KeyCode::Backspace), None);
        assert_eq!(*ctx.mode, AppMode::Detail);
        handle_detail_key(&mut ctx, KeyCode::Down);
        assert_eq!(ctx.model.cursor(), 1);
    }
}
