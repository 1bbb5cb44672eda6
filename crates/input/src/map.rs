//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Down arrow and `s` hold fast fall.
pub fn is_fast_fall_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S'))
}

/// Map keyboard input to game actions.
///
/// Releases only matter for the fast-fall key. Once the game is over, Enter
/// and Space start a new session.
pub fn handle_key_event(key: KeyEvent, game_over: bool) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return is_fast_fall_key(key.code).then_some(GameAction::StopFastFall);
    }

    if game_over && matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        return Some(GameAction::Reset);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        code if is_fast_fall_key(code) => Some(GameAction::StartFastFall),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(GameAction::TogglePause),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
