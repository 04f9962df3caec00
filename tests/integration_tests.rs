//! Integration tests for the input -> game state -> render pipeline

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tui_flappy::core::GameState;
use tui_flappy::input::{handle_key_event, pointer_press, should_quit};
use tui_flappy::term::{GameView, Viewport};
use tui_flappy::types::{GameConfig, Phase};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn feed(state: &mut GameState, code: KeyCode) -> bool {
    match handle_key_event(press(code)) {
        Some(action) => state.apply_action(action),
        None => false,
    }
}

fn click(state: &mut GameState, view: &GameView, viewport: Viewport, col: u16, row: u16) -> bool {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: col,
        row,
        modifiers: KeyModifiers::NONE,
    };
    let Some((c, r)) = pointer_press(mouse) else {
        return false;
    };
    let hit = view
        .cell_to_world(&state.snapshot(), viewport, c, r)
        .is_some_and(|(x, y)| state.start_button_hit(x, y));
    hit && state.apply_action(tui_flappy::types::GameAction::Start)
}

#[test]
fn test_keyboard_session() {
    let mut state = GameState::new(GameConfig::default(), 12345, 0);

    // Flap and restart do nothing on the start screen.
    assert!(!feed(&mut state, KeyCode::Char(' ')));
    assert!(!feed(&mut state, KeyCode::Char('r')));
    assert_eq!(state.phase(), Phase::NotStarted);

    assert!(feed(&mut state, KeyCode::Enter));
    assert_eq!(state.phase(), Phase::Playing);

    assert!(feed(&mut state, KeyCode::Up));
    assert_eq!(state.session().bird.velocity, -8.0);

    while state.tick() {}
    assert_eq!(state.phase(), Phase::GameOver);

    assert!(!feed(&mut state, KeyCode::Char(' ')));
    assert!(feed(&mut state, KeyCode::Char('R')));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_click_outside_button_does_not_start() {
    let mut state = GameState::new(GameConfig::default(), 1, 0);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    // Letterbox and sky cells.
    assert!(!click(&mut state, &view, viewport, 0, 0));
    assert!(!click(&mut state, &view, viewport, 30, 2));
    assert_eq!(state.phase(), Phase::NotStarted);

    assert!(click(&mut state, &view, viewport, 40, 11));
    assert_eq!(state.phase(), Phase::Playing);

    // The button is gone once playing.
    assert!(!click(&mut state, &view, viewport, 40, 11));
}

#[test]
fn test_quit_keys_are_not_actions() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        assert!(should_quit(press(code)));
        assert_eq!(handle_key_event(press(code)), None);
    }
    let ctrl_c = KeyEvent::new_with_kind(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
        KeyEventKind::Press,
    );
    assert!(should_quit(ctrl_c));
}
