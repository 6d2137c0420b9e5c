use crate::plugin::FileItem;
use crate::tui::state::App;
use crate::tui::view::components::footer::render_detail_footer;
use crate::tui::view::components::{render_title, screen_chunks};
use crate::utils::{format_size, truncate_left, truncate_right};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const NAME_WIDTH: usize = 48;

fn item_line(item: &FileItem, marked: bool) -> Line<'static> {
    let check = if marked { "[x] " } else { "[ ] " };
    let icon = if item.is_dir { "📁 " } else { "📄 " };
    let name = truncate_right(&item.name, NAME_WIDTH, NAME_WIDTH - 3);
    let age = item
        .age_days
        .map(|days| format!("  {days}d old"))
        .unwrap_or_default();

    Line::from(vec![
        Span::styled(
            check,
            Style::default().fg(if marked { Color::Green } else { Color::DarkGray }),
        ),
        Span::raw(icon),
        Span::styled(format!("{:<width$}", name, width = NAME_WIDTH), Style::default().fg(Color::White)),
        Span::styled(format!("{:>12}", format_size(item.size)), Style::default().fg(Color::Green)),
        Span::styled(age, Style::default().fg(Color::DarkGray)),
    ])
}

pub fn render_detail(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());
    let model = &app.model;

    let crumbs = model.breadcrumb().join(" / ");
    let width = chunks[0].width.saturating_sub(14) as usize;
    render_title(
        f,
        chunks[0],
        vec![Span::styled(truncate_left(&crumbs, width), Style::default().fg(Color::Green))],
    );

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(chunks[1]);

    let items: Vec<ListItem> = model
        .listing()
        .iter()
        .map(|item| ListItem::new(item_line(item, model.is_marked(&item.path))))
        .collect();

    let title = if app.pending_listing.is_some() {
        "Loading...".to_string()
    } else if model.listing().is_empty() {
        "Empty".to_string()
    } else {
        format!(
            "{} items ({})",
            model.listing().len(),
            format_size(model.listing_total())
        )
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::NONE)
                .title(Span::styled(title, Style::default().fg(Color::Yellow))),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !model.listing().is_empty() {
        state.select(Some(model.cursor()));
    }
    f.render_stateful_widget(list, body[0], &mut state);

    let status = app.message.as_deref().unwrap_or("");
    f.render_widget(
        Paragraph::new(Span::styled(status, Style::default().fg(Color::Cyan)))
            .block(Block::default().borders(Borders::TOP)),
        body[1],
    );

    render_detail_footer(f, chunks[2], model.marked().len(), model.marked_size());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_item_line_shows_mark_and_age() {
        let item = FileItem::new(PathBuf::from("/d/setup.dmg"), "setup.dmg", 2_500_000).with_age_days(45);
        let line = text(&item_line(&item, true));
        assert!(line.starts_with("[x] 📄 setup.dmg"));
        assert!(line.contains("2.5"));
        assert!(line.ends_with("45d old"));

        let dir = FileItem::new(PathBuf::from("/d/cache"), "cache", 10).with_dir(true);
        assert!(text(&item_line(&dir, false)).starts_with("[ ] 📁 cache"));
    }
}
