use crate::plugin::ScanProfile;
use crate::tui::state::ScanStatus;
use crate::tui::view::components::footer::render_scanning_footer;
use crate::tui::view::components::{render_title, screen_chunks};
use crate::utils::{format_size, truncate_left};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_scanning(f: &mut Frame, status: &ScanStatus) {
    let chunks = screen_chunks(f.area());
    let label = status.profile.map(|p| p.label()).unwrap_or("Scan");
    render_title(f, chunks[0], vec![Span::raw(label)]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(chunks[1]);

    let elapsed = status.elapsed();
    let frame = SPINNER[(elapsed.as_millis() / 100) as usize % SPINNER.len()];

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{frame} Scanning... "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} found, {}", status.found, format_size(status.found_size)),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("  {}s", elapsed.as_secs()),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    if !status.current_category.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("Category: "),
            Span::styled(&status.current_category, Style::default().fg(Color::Yellow)),
        ]));
    }
    if status.profile == Some(ScanProfile::Deep) {
        lines.push(Line::from(Span::styled(
            "Looking for node_modules, virtualenvs, target and build dirs plus tool caches",
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(lines), body[0]);

    let width = body[1].width.saturating_sub(2) as usize;
    let recent: Vec<ListItem> = status
        .recent
        .iter()
        .map(|path| ListItem::new(Span::raw(truncate_left(path, width))))
        .collect();
    let list = List::new(recent).block(
        Block::default()
            .borders(Borders::TOP)
            .title(Span::styled("Recent", Style::default().fg(Color::Yellow))),
    );
    f.render_widget(list, body[1]);

    render_scanning_footer(f, chunks[2]);
}
