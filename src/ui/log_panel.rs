use super::theme;
use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw_log_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            " TRANSITIONS ",
            theme::panel_title_style(),
        )]))
        .borders(Borders::TOP)
        .border_style(theme::border_style(false))
        .style(Style::default().bg(theme::SURFACE));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.logs.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  > Nothing yet.",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::ITALIC),
        )));
        f.render_widget(empty, inner);
        return;
    }

    // Newest at the bottom.
    let visible = inner.height as usize;
    let start = app.logs.len().saturating_sub(visible);

    let lines: Vec<Line> = app.logs[start..]
        .iter()
        .map(|log| {
            Line::from(vec![
                Span::styled(format!("  {} ", log.time), theme::footer_style()),
                Span::styled(&log.text, theme::log_style(log.mode)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
