use crate::tui::state::CleanStatus;
use crate::tui::view::components::{centered_rect, render_title, screen_chunks};
use crate::utils::truncate_left;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Gauge};
use ratatui::Frame;

pub fn render_cleaning(f: &mut Frame, status: &CleanStatus) {
    let chunks = screen_chunks(f.area());
    render_title(
        f,
        chunks[0],
        vec![Span::raw(format!("Cleaning {}", status.label))],
    );

    let area = centered_rect(70, 25, chunks[1]);
    let width = area.width.saturating_sub(4) as usize;
    let label = if status.current.is_empty() {
        format!("{}/{}", status.done, status.total)
    } else {
        format!(
            "{}/{}  {}",
            status.done,
            status.total,
            truncate_left(&status.current, width.saturating_sub(12))
        )
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Deleting ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(status.ratio())
        .label(label);

    f.render_widget(Clear, area);
    f.render_widget(gauge, area);
}
