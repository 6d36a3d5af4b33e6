//! Application constants for the lazymeal TUI.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// How often the main loop wakes up when no events are pending.
pub const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search bar area (in rows).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the footer hint line (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of each recipe card in the results list (in rows).
///
/// Each card displays:
/// - Line 1: Name and area/category tags
/// - Line 2: Thumbnail URL
/// - Line 3: Descriptive sentence
/// - Line 4: Time and difficulty badges
/// - Line 5: Empty spacer
pub const CARD_HEIGHT: u16 = 5;

/// Rows moved by a PageUp/PageDown step inside the detail popup.
pub const DETAIL_PAGE_STEP: u16 = 10;

// ============================================================================
// User-Facing Messages
// ============================================================================

/// Shown when the search is triggered with an empty or whitespace-only query.
pub const MSG_EMPTY_QUERY: &str = "Please enter a search term.";

/// Shown in the results area while a fetch is in flight.
pub const MSG_LOADING: &str = "Fetching Recipes...";

/// Shown when the API returns the null/absent result marker.
pub const MSG_NO_RESULTS: &str = "No recipes found. Try a different search term.";

/// Shown for any transport or parse failure; the cause only goes to the log.
pub const MSG_FETCH_ERROR: &str = "Error fetching recipes. Please try again.";

/// Shown before the first search.
pub const MSG_IDLE: &str = "Type a dish name and press Enter to search.";
