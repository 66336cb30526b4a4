use super::theme;
use crate::app::App;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const SPARKLE_CHARS: &[char] = &['.', '+', '✦', '+', '.', ' '];

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let tick = app.tick as usize;
    let night = app.mode().is_night();

    // Sparkles only come out at night.
    let (left, right) = if night {
        (
            SPARKLE_CHARS[tick / 4 % SPARKLE_CHARS.len()],
            SPARKLE_CHARS[(tick / 4 + 3) % SPARKLE_CHARS.len()],
        )
    } else {
        (' ', ' ')
    };

    let title = format!("{} Theme Switcher {}", left, right);
    let status = format!(
        "{} · seed {} · {} stars",
        app.mode(),
        app.stars.seed(),
        app.stars.field().len()
    );

    let lines = vec![
        Line::from(""),
        centered(&title, area.width, theme::title_style()),
        centered(&status, area.width, theme::subtitle_style()),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn centered(text: &str, width: u16, style: ratatui::style::Style) -> Line<'static> {
    let pad = usize::from(width).saturating_sub(text.width()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text.to_string(), style),
    ])
}
