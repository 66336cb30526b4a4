use crate::app::App;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use daybreak::{Input, Key};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('r') => app.randomize_seed(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step_seed(1),
        KeyCode::Char('-') => app.step_seed(-1),
        code => app.handle_toggle(Input::Key(toggle_key(code))),
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let track = ui::layout::toggle_rect(app.viewport, &app.geometry, app.config.scale);
    if track.contains((mouse.column, mouse.row).into()) {
        app.handle_toggle(Input::Pointer);
    }
}

fn toggle_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
