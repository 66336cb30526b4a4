use super::*;
use daybreak::config::Config;
use daybreak::Mode;
use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::layout::Rect;

fn app() -> App {
    let mut app = App::with_config(Config {
        sound: false,
        ..Config::default()
    });
    app.viewport = Rect::new(0, 0, 120, 40);
    app
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn enter_and_space_toggle() {
    let mut app = app();
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.mode(), Mode::Night);
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.mode(), Mode::Day);
}

#[test]
fn other_keys_do_not_toggle() {
    let mut app = app();
    for code in [KeyCode::Tab, KeyCode::Char('x'), KeyCode::Left, KeyCode::F(5)] {
        handle_key(&mut app, press(code));
    }
    assert_eq!(app.mode(), Mode::Day);
    assert_eq!(app.toggle.transitions(), 0);
}

#[test]
fn click_inside_track_matches_keyboard() {
    let mut by_mouse = app();
    let track = ui::layout::toggle_rect(by_mouse.viewport, &by_mouse.geometry, 1.0);
    handle_mouse(&mut by_mouse, click(track.x + 1, track.y + 1));

    let mut by_key = app();
    handle_key(&mut by_key, press(KeyCode::Enter));

    assert_eq!(by_mouse.mode(), by_key.mode());
    assert_eq!(by_mouse.toggle.transitions(), by_key.toggle.transitions());
}

#[test]
fn click_outside_track_is_ignored() {
    let mut app = app();
    handle_mouse(&mut app, click(0, 0));
    assert_eq!(app.mode(), Mode::Day);
}

#[test]
fn seed_keys_step_the_seed() {
    let mut app = app();
    handle_key(&mut app, press(KeyCode::Char('+')));
    assert_eq!(app.stars.seed(), 1);
    handle_key(&mut app, press(KeyCode::Char('-')));
    handle_key(&mut app, press(KeyCode::Char('-')));
    assert_eq!(app.stars.seed(), -1);
}

#[test]
fn quit_keys() {
    let mut app = app();
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.should_quit);
}
