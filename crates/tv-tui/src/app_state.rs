//! AppState — shared read-only data passed to all components during render/event.
//!
//! Components read the session through this, but never mutate it.
//! The App event-loop is the only thing that writes to AppState.

use tv_core::Session;

use crate::theme::Palette;
use crate::widgets::status_bar::InputMode;

pub struct AppState {
    pub session: Session,
    pub palette: Palette,
    pub dark_mode: bool,
    pub input_mode: InputMode,
    /// Advances on every UI tick; drives the loading spinner.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(session: Session, dark_mode: bool) -> Self {
        Self {
            session,
            palette: Palette::for_mode(dark_mode),
            dark_mode,
            input_mode: InputMode::Normal,
            spinner_frame: 0,
        }
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.palette = Palette::for_mode(dark);
    }

    /// Display name of the active category.
    pub fn active_category_name(&self) -> &str {
        let id = &self.session.filter().active_category;
        self.session
            .catalog()
            .category(id)
            .map(|c| c.name.as_str())
            .unwrap_or(id.as_str())
    }

    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.session
            .catalog()
            .category(id)
            .map(|c| c.name.as_str())
            .unwrap_or(id)
    }
}
