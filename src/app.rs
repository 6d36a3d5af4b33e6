use arboard::Clipboard;
use color_eyre::Result;
use ratatui::widgets::ListState;

use crate::{
    client::SearchOutcome,
    constants::{DETAIL_PAGE_STEP, MSG_EMPTY_QUERY, MSG_FETCH_ERROR, MSG_NO_RESULTS},
    event::Action,
    meal::Meal,
    network::FetchManager,
};

/// Focus area in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBar,
    Results,
}

/// What the results area currently shows.
///
/// Prompt, no-results and error texts are ordinary result variants that
/// replace the card list, exactly like the cards themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Results(Vec<Meal>),
    Message(String),
}

/// Content of the detail popup while it is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub meal: Meal,
    pub scroll: u16,
    /// Rough line count of the rendered detail, used to clamp scrolling.
    content_height: u16,
}

impl DetailState {
    fn new(meal: Meal) -> Self {
        let ingredient_lines = meal.ingredient_list().len();
        let instruction_lines = meal.instructions.lines().count();
        let content_height = (ingredient_lines + instruction_lines + 4).min(u16::MAX as usize);
        Self {
            meal,
            scroll: 0,
            content_height: content_height as u16,
        }
    }

    fn scroll_up(&mut self, step: u16) {
        self.scroll = self.scroll.saturating_sub(step);
    }

    fn scroll_down(&mut self, step: u16) {
        self.scroll = (self.scroll + step).min(self.content_height.saturating_sub(1));
    }
}

/// State for popups. The detail popup's state machine is {None, Detail};
/// opening while already visible replaces the content, closing while hidden
/// is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupState {
    None,
    Detail(DetailState),
    Message(String),
}

/// The main application struct holding the state.
pub struct App {
    pub focus: Focus,
    pub exit: bool,

    pub search_input: String,
    pub search_state: SearchState,
    pub list_state: ListState,
    pub popup_state: PopupState,

    /// Tag of the most recently issued fetch; older results are discarded.
    pub latest_search_seq: u64,

    clipboard: Option<Clipboard>,
}

impl App {
    /// Creates a new App instance.
    pub fn new() -> Self {
        Self {
            focus: Focus::SearchBar,
            exit: false,
            search_input: String::new(),
            search_state: SearchState::Idle,
            list_state: ListState::default(),
            popup_state: PopupState::None,
            latest_search_seq: 0,
            // Clipboard may be unavailable (e.g. headless); copying then
            // reports an error message instead.
            clipboard: Clipboard::new().ok(),
        }
    }

    /// Updates the application state based on the received action.
    pub fn update(&mut self, action: Action, fetch: &FetchManager) -> Result<()> {
        match action {
            Action::Quit => self.exit = true,
            Action::SwitchFocus => self.handle_switch_focus(),

            Action::SearchInput(c) => self.search_input.push(c),
            Action::SearchBackspace => {
                self.search_input.pop();
            }
            Action::PerformSearch => self.handle_perform_search(fetch),
            Action::FetchRandom => self.handle_fetch_random(fetch),

            Action::MoveSelectionUp | Action::HandleScrollUp => self.handle_scroll_up(),
            Action::MoveSelectionDown | Action::HandleScrollDown => self.handle_scroll_down(),
            Action::ScrollPageUp => self.handle_scroll_page(true),
            Action::ScrollPageDown => self.handle_scroll_page(false),

            Action::ShowDetails => self.open_detail(),
            Action::CloseDetailsOrPopup | Action::ClearPopup => {
                self.popup_state = PopupState::None;
            }
            Action::CopyIngredients => self.copy_ingredients_to_clipboard(),
            Action::OpenSourceUrl => self.open_source_url(),
            Action::ShowMessage(msg) => self.show_message(msg),

            Action::UpdateSearchResults { seq, result } => {
                self.handle_search_results_update(seq, result);
            }
        }
        Ok(())
    }

    /// The meal a detail-oriented action applies to: the open detail if the
    /// popup is visible, otherwise the selected card.
    pub fn active_meal(&self) -> Option<&Meal> {
        if let PopupState::Detail(detail) = &self.popup_state {
            return Some(&detail.meal);
        }
        self.selected_meal()
    }

    pub fn selected_meal(&self) -> Option<&Meal> {
        let SearchState::Results(meals) = &self.search_state else {
            return None;
        };
        self.list_state.selected().and_then(|i| meals.get(i))
    }

    // --- Search dispatch ---

    fn handle_perform_search(&mut self, fetch: &FetchManager) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            self.search_state = SearchState::Message(MSG_EMPTY_QUERY.to_string());
            return;
        }

        // Prior results are discarded before the request goes out.
        self.search_state = SearchState::Loading;
        self.list_state.select(None);
        self.focus = Focus::Results;
        self.latest_search_seq = fetch.search(query);
    }

    fn handle_fetch_random(&mut self, fetch: &FetchManager) {
        self.search_state = SearchState::Loading;
        self.list_state.select(None);
        self.focus = Focus::Results;
        self.latest_search_seq = fetch.fetch_random();
    }

    fn handle_search_results_update(&mut self, seq: u64, result: Result<SearchOutcome, String>) {
        if seq < self.latest_search_seq {
            tracing::debug!(seq, latest = self.latest_search_seq, "dropping stale result");
            return;
        }

        match result {
            Ok(SearchOutcome::Found(meals)) => {
                self.search_state = SearchState::Results(meals);
                self.list_state.select(Some(0));
            }
            Ok(SearchOutcome::NoMatches) => {
                self.search_state = SearchState::Message(MSG_NO_RESULTS.to_string());
                self.list_state.select(None);
            }
            Err(cause) => {
                // The cause is diagnostics only; the user gets the generic text.
                tracing::error!(%cause, "recipe fetch failed");
                self.search_state = SearchState::Message(MSG_FETCH_ERROR.to_string());
                self.list_state.select(None);
            }
        }
    }

    // --- Focus, selection and scrolling ---

    fn handle_switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchBar => Focus::Results,
            Focus::Results => Focus::SearchBar,
        };
    }

    fn handle_scroll_up(&mut self) {
        if let PopupState::Detail(detail) = &mut self.popup_state {
            detail.scroll_up(1);
            return;
        }
        self.move_selection(|index, len| if index == 0 { len - 1 } else { index - 1 });
    }

    fn handle_scroll_down(&mut self) {
        if let PopupState::Detail(detail) = &mut self.popup_state {
            detail.scroll_down(1);
            return;
        }
        self.move_selection(|index, len| (index + 1) % len);
    }

    fn handle_scroll_page(&mut self, up: bool) {
        if let PopupState::Detail(detail) = &mut self.popup_state {
            if up {
                detail.scroll_up(DETAIL_PAGE_STEP);
            } else {
                detail.scroll_down(DETAIL_PAGE_STEP);
            }
        } else if up {
            self.handle_scroll_up();
        } else {
            self.handle_scroll_down();
        }
    }

    fn move_selection(&mut self, step: impl Fn(usize, usize) -> usize) {
        let SearchState::Results(meals) = &self.search_state else {
            return;
        };
        if meals.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(step(current, meals.len())));
    }

    // --- Detail popup ---

    fn open_detail(&mut self) {
        // Opening while a detail is already visible replaces the content.
        if let Some(meal) = self.selected_meal().cloned() {
            self.popup_state = PopupState::Detail(DetailState::new(meal));
        }
    }

    // --- Integrations ---

    fn copy_ingredients_to_clipboard(&mut self) {
        let Some(meal) = self.active_meal() else {
            self.show_message("No recipe selected to copy.".to_string());
            return;
        };
        let entries = meal.ingredient_list();
        if entries.is_empty() {
            self.show_message("No ingredients listed for this recipe.".to_string());
            return;
        }
        let name = meal.name.clone();
        let text = entries.join("\n");

        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text) {
                Ok(_) => self.show_message(format!("Copied ingredients for {name}")),
                Err(e) => self.show_message(format!("Clipboard Error: {e}")),
            }
        } else {
            self.show_message("Clipboard not available".to_string());
        }
    }

    fn open_source_url(&mut self) {
        let Some(meal) = self.active_meal() else {
            self.show_message("No recipe selected.".to_string());
            return;
        };
        let Some(url) = meal.source_url.clone() else {
            self.show_message("No source link for this recipe.".to_string());
            return;
        };
        if let Err(e) = open::that(&url) {
            tracing::warn!(%url, "failed to open source link: {e}");
            self.show_message("Could not open the source link.".to_string());
        }
    }

    /// Sets the popup state to show a message.
    fn show_message(&mut self, msg: String) {
        self.popup_state = if msg.is_empty() {
            PopupState::None
        } else {
            PopupState::Message(msg)
        };
    }
}
