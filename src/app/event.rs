use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    if state.show_help {
        // Any key closes the help overlay
        state.show_help = false;
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }

        // Copy install command
        (KeyCode::Char('c'), KeyModifiers::NONE)
        | (KeyCode::Char('y'), KeyModifiers::NONE)
        | (KeyCode::Enter, KeyModifiers::NONE) => {
            state.copy_install_command();
        }

        (KeyCode::Down, KeyModifiers::NONE)
        | (KeyCode::Char('j'), KeyModifiers::NONE)
        | (KeyCode::Tab, KeyModifiers::NONE) => {
            state.next_feature();
        }
        (KeyCode::Up, KeyModifiers::NONE)
        | (KeyCode::Char('k'), KeyModifiers::NONE)
        | (KeyCode::BackTab, _) => {
            state.prev_feature();
        }

        (KeyCode::Char('?'), _) => {
            state.show_help = true;
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            state.should_quit = true;
        }

        _ => {}
    }
}
