use super::{header, log_panel, sky, theme};
use crate::app::App;
use daybreak::presentation::TrackGeometry;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Track units covered by one terminal column / row at scale 1.
pub const UNITS_PER_COL: f64 = 6.0;
pub const UNITS_PER_ROW: f64 = 14.0;

const MIN_TOGGLE: (u16, u16) = (12, 4);

/// header | body | log | footer
fn split(area: Rect) -> [Rect; 4] {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(6),    // toggle
            Constraint::Length(8), // transition log
            Constraint::Length(1), // footer
        ])
        .split(area);
    [vert[0], vert[1], vert[2], vert[3]]
}

/// Where the toggle is drawn inside `area`. Also used for mouse hit testing.
pub fn toggle_rect(area: Rect, geometry: &TrackGeometry, scale: f64) -> Rect {
    let body = split(area)[1];
    let (w, h) = geometry.outer_size(scale);
    let width = ((w / UNITS_PER_COL).round() as u16)
        .max(MIN_TOGGLE.0)
        .min(body.width);
    let height = ((h / UNITS_PER_ROW).round() as u16)
        .max(MIN_TOGGLE.1)
        .min(body.height);
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + (body.height - height) / 2,
        width,
        height,
    }
}

pub fn draw_layout(f: &mut Frame, area: Rect, app: &App) {
    let [head, _, log, foot] = split(area);

    header::draw_header(f, head, app);
    sky::draw_sky(f, toggle_rect(area, &app.geometry, app.config.scale), app);
    log_panel::draw_log_panel(f, log, app);
    draw_footer(f, foot, app);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    // Show flash message if active, otherwise normal footer
    if let Some(msg) = &app.flash_message {
        if app.tick < app.flash_until {
            let footer = Line::from(vec![Span::styled(
                format!(" {} ", msg),
                theme::key_hint_style(),
            )]);
            f.render_widget(Paragraph::new(footer), area);
            return;
        }
    }

    let footer = Line::from(vec![
        Span::styled(" [Enter/Space/Click]", theme::key_hint_style()),
        Span::styled(" Toggle  ", theme::footer_style()),
        Span::styled("[r]", theme::key_hint_style()),
        Span::styled(" Random seed  ", theme::footer_style()),
        Span::styled("[+/-]", theme::key_hint_style()),
        Span::styled(" Step seed  ", theme::footer_style()),
        Span::styled("[q]", theme::key_hint_style()),
        Span::styled(" Quit", theme::footer_style()),
    ]);

    f.render_widget(Paragraph::new(footer), area);
}
