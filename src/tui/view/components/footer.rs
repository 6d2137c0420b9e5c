use crate::utils::format_size;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn key_spans(keys: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (i, (key, label)) in keys.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        if i + 1 == keys.len() {
            spans.push(Span::raw(format!(" {label}")));
        } else {
            spans.push(Span::raw(format!(" {label}  ")));
        }
    }
    spans
}

fn render_footer(f: &mut Frame, area: Rect, spans: Vec<Span>) {
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}

pub fn render_menu_footer(f: &mut Frame, area: Rect) {
    render_footer(
        f,
        area,
        key_spans(&[("↑↓", "Nav"), ("Enter", "Select"), ("q", "Quit")]),
    );
}

pub fn render_scanning_footer(f: &mut Frame, area: Rect) {
    render_footer(f, area, key_spans(&[("q", "Quit")]));
}

pub fn render_results_footer(f: &mut Frame, area: Rect) {
    render_footer(
        f,
        area,
        key_spans(&[
            ("↑↓", "Nav"),
            ("Enter", "Open"),
            ("c", "Clean category"),
            ("Esc", "Menu"),
            ("q", "Quit"),
        ]),
    );
}

pub fn render_detail_footer(f: &mut Frame, area: Rect, marked: usize, marked_size: u64) {
    let mut spans = key_spans(&[
        ("↑↓", "Nav"),
        ("Space", "Mark"),
        ("A/N", "All/None"),
        ("D", "Delete marked"),
        ("c", "Delete"),
        ("Enter", "Open"),
        ("⌫", "Up"),
        ("Esc", "Menu"),
    ]);

    if marked > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("| {} marked ({})", marked, format_size(marked_size)),
            Style::default().fg(Color::Green),
        ));
    }

    render_footer(f, area, spans);
}

pub fn render_disk_usage_footer(f: &mut Frame, area: Rect) {
    render_footer(f, area, key_spans(&[("↑↓", "Nav"), ("Esc/q", "Menu")]));
}
