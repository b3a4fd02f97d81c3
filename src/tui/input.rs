//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, PopupState};

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Start a fresh load of both endpoints.
    Reload,
    /// Open a job link in the browser.
    OpenLink(String),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;

    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => {
            *scroll = scroll.saturating_sub(1);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            // Clamped during render
            *scroll = scroll.saturating_add(1);
            KeyAction::None
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Char('q') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Char('?') | KeyCode::F(1) => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Reload,

        KeyCode::Up | KeyCode::Char('k') => {
            state.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_down();
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.page_up(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.page_down(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.select_first();
            KeyAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.select_last();
            KeyAction::None
        }

        KeyCode::Enter | KeyCode::Char('o') => match state.selected_job() {
            Some(job) => KeyAction::OpenLink(job.url.clone()),
            None => KeyAction::None,
        },

        KeyCode::Char('/') if state.view.is_ready() => {
            state.input_mode = InputMode::Filter;
            state.filter_input = state.filter.clone().unwrap_or_default();
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles keys in filter mode. The filter applies as it is typed.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.set_filter(None);
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            state.set_filter(Some(state.filter_input.clone()));
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            state.set_filter(Some(state.filter_input.clone()));
        }
        _ => {}
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{MockSource, load};
    use crate::view::ViewEvent;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new("demo data");
        state.view.apply(ViewEvent::LoadStarted { session: 1 });
        state.view.apply(ViewEvent::LoadFinished {
            session: 1,
            result: load(&MockSource::sample()),
        });
        state
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = AppState::new("demo data");

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_confirmation_can_be_cancelled() {
        let mut state = AppState::new("demo data");
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn r_requests_reload_even_while_loading() {
        let mut state = AppState::new("demo data");
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('r'))),
            KeyAction::Reload
        );
    }

    #[test]
    fn enter_opens_selected_job_url() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Down));
        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(
            action,
            KeyAction::OpenLink("https://jobs.example.com/xyz/software-engineer".to_string())
        );
    }

    #[test]
    fn enter_does_nothing_while_loading() {
        let mut state = AppState::new("demo data");
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::None);
    }

    #[test]
    fn filter_mode_applies_while_typing_and_esc_clears() {
        let mut state = ready_state();

        handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Filter);

        handle_key(&mut state, key(KeyCode::Char('x')));
        handle_key(&mut state, key(KeyCode::Char('y')));
        assert_eq!(state.filter.as_deref(), Some("xy"));
        assert_eq!(state.visible_jobs().len(), 1);

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filter, None);
    }

    #[test]
    fn filter_is_kept_after_enter() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('/')));
        handle_key(&mut state, key(KeyCode::Char('a')));
        handle_key(&mut state, key(KeyCode::Char('b')));
        handle_key(&mut state, key(KeyCode::Char('c')));
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filter.as_deref(), Some("abc"));
        assert_eq!(state.visible_jobs().len(), 2);
    }

    #[test]
    fn help_popup_toggles_and_scrolls() {
        let mut state = AppState::new("demo data");
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }
}
