//! Action enum — all user-initiated intents and internal events.

/// Unique identifier for a focusable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Header,
    CategoryBar,
    ChannelList,
    Shelves,
    Player,
    HelpOverlay,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Channels ─────────────────────────────────────────────────────────────
    SelectChannel(String),
    ToggleFavorite(String),
    OpenExternal(String),
    CopyUrl(String),
    BackToList,

    // ── Filter/search ────────────────────────────────────────────────────────
    SetCategory(String),
    CycleCategory(isize),
    ResetCategory,
    OpenFilter,
    CloseFilter,
    SearchChanged(String),

    // ── Navigation ───────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusPane(ComponentId),

    // ── UI toggles ───────────────────────────────────────────────────────────
    ToggleTheme,
    ToggleHelp,
    ToggleKeys,

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
    Noop,
}
