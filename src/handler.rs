use crate::{
    app::{App, Focus, PopupState},
    event::Action,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(app: &App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(key, app),
        Event::Mouse(mouse) => handle_mouse_events(mouse),
        _ => None,
    }
}

fn handle_key_press(key_event: KeyEvent, app: &App) -> Option<Action> {
    match &app.popup_state {
        PopupState::Message(_) => handle_message_popup_keys(key_event),
        PopupState::Detail(_) => handle_detail_popup_keys(key_event),
        PopupState::None => match app.focus {
            Focus::SearchBar => handle_search_bar_keys(key_event),
            Focus::Results => handle_results_keys(key_event),
        },
    }
}

/// Keys while a plain message popup is shown.
fn handle_message_popup_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::ClearPopup),
        _ => None,
    }
}

/// Keys while the recipe detail popup is visible.
fn handle_detail_popup_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::CloseDetailsOrPopup),
        KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Down => Some(Action::MoveSelectionDown),
        KeyCode::PageUp => Some(Action::ScrollPageUp),
        KeyCode::PageDown => Some(Action::ScrollPageDown),
        KeyCode::Char('c') => Some(Action::CopyIngredients),
        KeyCode::Char('o') => Some(Action::OpenSourceUrl),
        _ => None,
    }
}

/// Keys while typing in the search bar. Characters go into the query, so
/// shortcuts like `q` are not active here.
fn handle_search_bar_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::SwitchFocus),
        KeyCode::Enter => Some(Action::PerformSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Down => Some(Action::SwitchFocus),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

/// Keys while the results list has focus.
fn handle_results_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('/') | KeyCode::Tab => Some(Action::SwitchFocus),
        KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Down => Some(Action::MoveSelectionDown),
        KeyCode::PageUp => Some(Action::ScrollPageUp),
        KeyCode::PageDown => Some(Action::ScrollPageDown),
        KeyCode::Enter => Some(Action::ShowDetails),
        KeyCode::Char('c') => Some(Action::CopyIngredients),
        KeyCode::Char('o') => Some(Action::OpenSourceUrl),
        KeyCode::Char('r') => Some(Action::FetchRandom),
        _ => None,
    }
}

fn handle_mouse_events(mouse_event: MouseEvent) -> Option<Action> {
    match mouse_event.kind {
        MouseEventKind::ScrollDown => Some(Action::HandleScrollDown),
        MouseEventKind::ScrollUp => Some(Action::HandleScrollUp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn typing_feeds_the_search_bar() {
        let app = App::new();
        assert!(matches!(
            handle_event(&app, press(KeyCode::Char('q'))),
            Some(Action::SearchInput('q'))
        ));
        assert!(matches!(
            handle_event(&app, press(KeyCode::Enter)),
            Some(Action::PerformSearch)
        ));
    }

    #[test]
    fn q_quits_only_from_the_results_list() {
        let mut app = App::new();
        app.focus = Focus::Results;
        assert!(matches!(
            handle_event(&app, press(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
        assert!(matches!(
            handle_event(&app, press(KeyCode::Enter)),
            Some(Action::ShowDetails)
        ));
    }

    #[test]
    fn escape_closes_an_open_popup() {
        let mut app = App::new();
        app.popup_state = PopupState::Message("hi".to_string());
        assert!(matches!(
            handle_event(&app, press(KeyCode::Esc)),
            Some(Action::ClearPopup)
        ));
    }

    #[test]
    fn key_release_events_are_ignored() {
        let app = App::new();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(handle_event(&app, release).is_none());
    }
}
