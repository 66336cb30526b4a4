pub mod header;
pub mod layout;
pub mod log_panel;
pub mod sky;
pub mod theme;

use crate::app::App;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Master render function: page background, then header, toggle, log and footer.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(theme::BG)), area);

    layout::draw_layout(f, area, app);
}
