use crate::client::SearchOutcome;

/// Events sent from fetch tasks back to the UI loop.
///
/// `seq` is the sequence tag the fetch was issued with; the app drops results
/// that are older than the most recently issued fetch so the latest search
/// always wins, regardless of arrival order.
#[derive(Debug)]
pub enum FetchUpdateEvent {
    SearchResults {
        seq: u64,
        result: Result<SearchOutcome, String>,
    },
}

/// Application actions triggered by user input or fetch events.
#[derive(Debug)]
pub enum Action {
    Quit,
    SwitchFocus,

    SearchInput(char),
    SearchBackspace,
    PerformSearch,
    FetchRandom,

    MoveSelectionUp,
    MoveSelectionDown,
    ScrollPageUp,
    ScrollPageDown,
    HandleScrollUp,
    HandleScrollDown,

    ShowDetails,
    CloseDetailsOrPopup,
    ClearPopup,
    CopyIngredients,
    OpenSourceUrl,
    ShowMessage(String),

    UpdateSearchResults {
        seq: u64,
        result: Result<SearchOutcome, String>,
    },
}
