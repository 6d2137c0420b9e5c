use crate::tui::state::MenuEntry;
use crate::tui::view::components::footer::render_menu_footer;
use crate::tui::view::components::{render_title, screen_chunks};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

pub fn render_menu(f: &mut Frame, selected: usize) {
    let chunks = screen_chunks(f.area());
    render_title(f, chunks[0], vec![Span::raw("Clean up your home directory")]);

    let items: Vec<ListItem> = MenuEntry::ALL
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::raw(entry.label())),
                Line::from(Span::styled(
                    format!("   {}", entry.description()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, chunks[1], &mut state);

    render_menu_footer(f, chunks[2]);
}
