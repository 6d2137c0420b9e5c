use crate::tui::state::DiskUsageState;
use crate::tui::view::components::footer::render_disk_usage_footer;
use crate::tui::view::components::{render_title, screen_chunks};
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

fn capacity_color(capacity: &str) -> Color {
    match capacity.trim_end_matches('%').parse::<u8>() {
        Ok(p) if p >= 90 => Color::Red,
        Ok(p) if p >= 75 => Color::Yellow,
        _ => Color::Green,
    }
}

pub fn render_disk_usage(f: &mut Frame, disk_usage: &DiskUsageState) {
    let chunks = screen_chunks(f.area());
    render_title(f, chunks[0], vec![Span::raw("Disk Usage")]);

    if disk_usage.loading {
        let loading = Paragraph::new(Span::styled("Running df...", Style::default().fg(Color::Cyan)));
        f.render_widget(loading, chunks[1]);
        render_disk_usage_footer(f, chunks[2]);
        return;
    }

    let header = Row::new(["Filesystem", "Size", "Used", "Avail", "Use%", "Mounted on"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = disk_usage
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Span::raw(row.filesystem.as_str()),
                Span::raw(row.size.as_str()),
                Span::raw(row.used.as_str()),
                Span::raw(row.avail.as_str()),
                Span::styled(row.capacity.as_str(), Style::default().fg(capacity_color(&row.capacity))),
                Span::raw(row.mount.as_str()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(26),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::NONE))
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !disk_usage.rows.is_empty() {
        state.select(Some(disk_usage.selected));
    }
    f.render_stateful_widget(table, chunks[1], &mut state);

    render_disk_usage_footer(f, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_color_thresholds() {
        assert_eq!(capacity_color("46%"), Color::Green);
        assert_eq!(capacity_color("80%"), Color::Yellow);
        assert_eq!(capacity_color("100%"), Color::Red);
        assert_eq!(capacity_color("-"), Color::Green);
    }
}
