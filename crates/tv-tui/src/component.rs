//! Component trait — the interface every UI panel implements.
//!
//! - Components own their view state (cursor, scroll, filter input) and render themselves.
//! - Components receive `AppState` (read-only) for the session they don't own.
//! - Components produce `Vec<Action>`; they never mutate the session directly.
//! - The App event-loop dispatches those actions.

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;

pub trait Component {
    fn id(&self) -> ComponentId;

    /// Handle a key event. Only called when this component has focus.
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Handle a mouse event inside `area` (the area it was last drawn in).
    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action>;

    /// React to an action dispatched by the App, even when not focused.
    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState);
}
