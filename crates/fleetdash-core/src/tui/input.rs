//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, PopupState, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1)
            ) {
                state.popup = PopupState::None;
            }
            return KeyAction::None;
        }
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

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char('?') | KeyCode::F(1) => state.popup = PopupState::Help,

        // Tabs
        KeyCode::Tab => state.switch_tab(state.current_tab.next()),
        KeyCode::BackTab => state.switch_tab(state.current_tab.prev()),
        KeyCode::Char('1') => state.switch_tab(Tab::Devices),
        KeyCode::Char('2') => state.switch_tab(Tab::Nodes),
        KeyCode::Char('3') => state.switch_tab(Tab::Activities),

        // Filtering
        KeyCode::Char('/') => {
            state.filter_input = state.current().query().to_string();
            state.input_mode = InputMode::Filter;
        }
        KeyCode::Char('c') => state.cycle_category(true),
        KeyCode::Char('C') => state.cycle_category(false),

        // Header cursor and sorting
        KeyCode::Left | KeyCode::Char('h') => state.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => state.move_cursor(1),
        KeyCode::Char('s') | KeyCode::Enter => state.click_cursor_column(),
        KeyCode::Char('x') => state.current_mut().clear_sort(),

        // Horizontal scroll of unpinned columns
        KeyCode::Char('[') => state.scroll_horizontal(-1),
        KeyCode::Char(']') => state.scroll_horizontal(1),

        // Paging
        KeyCode::Char('n') | KeyCode::PageDown => state.current_mut().next_page(),
        KeyCode::Char('p') | KeyCode::PageUp => state.current_mut().prev_page(),
        KeyCode::Home | KeyCode::Char('g') => state.current_mut().first_page(),
        KeyCode::End | KeyCode::Char('G') => state.current_mut().last_page(),
        KeyCode::Char('+') | KeyCode::Char('=') => state.current_mut().cycle_page_size(true),
        KeyCode::Char('-') => state.current_mut().cycle_page_size(false),

        _ => {}
    }
    KeyAction::None
}

/// Handles keys in filter mode. The query is applied on every keystroke.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel filter
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.current_mut().set_query("");
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            apply_current_filter(state);
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            apply_current_filter(state);
        }
        _ => {}
    }
    KeyAction::None
}

fn apply_current_filter(state: &mut AppState) {
    let query = state.filter_input.clone();
    state.current_mut().set_query(&query);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Activity;
    use crate::table::SortDirection;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(state: &mut AppState, codes: &[KeyCode]) {
        for code in codes {
            handle_key(state, key(*code));
        }
    }

    fn state_with_activities(n: usize) -> AppState {
        let activities: Vec<Activity> = (0..n)
            .map(|i| Activity {
                id: Some(format!("a{i:02}")),
                action: Some(format!("action_{}", n - i)),
                ..Activity::default()
            })
            .collect();
        let mut state = AppState::new(Vec::new(), Vec::new(), activities);
        state.switch_tab(Tab::Activities);
        state
    }

    #[test]
    fn tab_keys_switch_tabs() {
        let mut state = state_with_activities(0);
        press(&mut state, &[KeyCode::Char('1')]);
        assert_eq!(state.current_tab, Tab::Devices);
        press(&mut state, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(state.current_tab, Tab::Activities);
        press(&mut state, &[KeyCode::BackTab]);
        assert_eq!(state.current_tab, Tab::Nodes);
    }

    #[test]
    fn filter_mode_applies_query_and_resets_page() {
        let mut state = state_with_activities(25);
        press(&mut state, &[KeyCode::Char('n')]);
        assert_eq!(state.activities.vm.page_state().page, 2);

        press(
            &mut state,
            &[KeyCode::Char('/'), KeyCode::Char('a'), KeyCode::Char('0')],
        );
        assert_eq!(state.input_mode, InputMode::Filter);
        assert_eq!(state.current().query(), "a0");
        assert_eq!(state.activities.vm.page_state().page, 1);

        press(&mut state, &[KeyCode::Enter]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.current().query(), "a0");

        press(&mut state, &[KeyCode::Char('/'), KeyCode::Esc]);
        assert_eq!(state.current().query(), "");
    }

    #[test]
    fn sort_key_cycles_three_states_and_keeps_page() {
        let mut state = state_with_activities(25);
        press(
            &mut state,
            &[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Right],
        );
        press(&mut state, &[KeyCode::Char('n')]);

        press(&mut state, &[KeyCode::Char('s')]);
        assert_eq!(
            state.activities.vm.sort_state().direction(),
            Some(SortDirection::Ascending)
        );
        assert_eq!(state.activities.vm.page_state().page, 2);

        press(&mut state, &[KeyCode::Char('s')]);
        assert_eq!(
            state.activities.vm.sort_state().direction(),
            Some(SortDirection::Descending)
        );

        press(&mut state, &[KeyCode::Char('s')]);
        assert!(!state.activities.vm.sort_state().is_active());
    }

    #[test]
    fn paging_and_page_size_keys() {
        let mut state = state_with_activities(25);
        press(&mut state, &[KeyCode::End]);
        assert_eq!(state.activities.vm.page_state().page, 3);
        press(&mut state, &[KeyCode::PageDown]);
        assert_eq!(state.activities.vm.page_state().page, 3);

        press(&mut state, &[KeyCode::Char('+')]);
        assert_eq!(state.activities.vm.page_state().page_size, 20);
        assert_eq!(state.activities.vm.page_state().page, 1);
        press(&mut state, &[KeyCode::Char('-'), KeyCode::Char('-')]);
        assert_eq!(state.activities.vm.page_state().page_size, 5);
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut state = state_with_activities(0);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);

        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut state = state_with_activities(25);
        press(&mut state, &[KeyCode::Char('?'), KeyCode::Char('n')]);
        assert_eq!(state.popup, PopupState::Help);
        assert_eq!(state.activities.vm.page_state().page, 1);
        press(&mut state, &[KeyCode::Esc]);
        assert_eq!(state.popup, PopupState::None);
    }
}
