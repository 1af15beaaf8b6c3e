//! Frontend configuration constants

/// Prefix for all artist catalogue requests (served by the same origin)
pub const API_BASE: &str = "/api";

/// Quiet period before a typed query is sent to the catalogue
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Vertical offset applied when scrolling to the results anchor on desktop
pub const SCROLL_ANCHOR_OFFSET: f64 = -50.0;

/// Viewports narrower than this are treated as mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// DOM id of the search input
pub const SEARCH_INPUT_ID: &str = "searchBarInput";

/// DOM id of the autocomplete listbox
pub const SEARCH_LISTBOX_ID: &str = "searchBarListbox";

pub const SEARCH_PLACEHOLDER: &str = "Type an artist name";
