use crate::tui::state::ResultModel;
use crate::tui::view::components::footer::render_results_footer;
use crate::tui::view::components::{render_title, screen_chunks};
use crate::utils::format_size;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render_results(f: &mut Frame, model: &ResultModel, selected: usize, message: Option<&str>) {
    let chunks = screen_chunks(f.area());
    let snapshot = model.snapshot();
    render_title(
        f,
        chunks[0],
        vec![
            Span::raw("Scan Results"),
            Span::styled(
                format!(" ({} in {} items)", format_size(snapshot.grand_total()), snapshot.item_count()),
                Style::default().fg(Color::DarkGray),
            ),
        ],
    );

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(chunks[1]);

    let mut items: Vec<ListItem> = snapshot
        .categories()
        .map(|result| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<28}", result.category), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>7} items", result.items().len()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{:>12}", format_size(result.total())), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();
    items.push(ListItem::new(Span::styled(
        "← Back to Menu",
        Style::default().fg(Color::Cyan),
    )));

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE).title(Span::styled(
            if snapshot.is_empty() { "Nothing to clean" } else { "Categories" },
            Style::default().fg(Color::Yellow),
        )))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, body[0], &mut state);

    let mut summary = vec![
        Span::styled(
            format!("{:<28}", "TOTAL"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>7} items", snapshot.item_count()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:>12}", format_size(snapshot.grand_total())),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(message) = message {
        summary.push(Span::styled(format!("   {message}"), Style::default().fg(Color::Cyan)));
    }
    f.render_widget(
        Paragraph::new(Line::from(summary)).block(Block::default().borders(Borders::TOP)),
        body[1],
    );

    render_results_footer(f, chunks[2]);
}
