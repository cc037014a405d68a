//! CategoryBar — one row of category tabs.
//!
//! Tabs are numbered so digits can jump to them; the hit ranges from the last
//! draw are kept for mouse clicks.

use std::ops::Range;

use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
};

pub struct CategoryBar {
    /// Column ranges (relative to the bar) and the category id drawn there.
    hits: Vec<(Range<u16>, String)>,
}

impl CategoryBar {
    pub fn new() -> Self {
        Self { hits: Vec::new() }
    }

    fn tab_label(pos: usize, name: &str) -> String {
        if pos < 9 {
            format!(" {} {} ", pos + 1, name)
        } else {
            format!(" {} ", name)
        }
    }

    fn layout(&mut self, state: &AppState) {
        self.hits.clear();
        let mut x = 0u16;
        for (pos, category) in state.session.catalog().categories().iter().enumerate() {
            let w = Self::tab_label(pos, &category.name).width() as u16;
            self.hits.push((x..x + w, category.id.clone()));
            x += w + 1;
        }
    }

    /// Category id `offset` tabs away from the active one, wrapping around.
    pub fn cycled(state: &AppState, offset: isize) -> Option<String> {
        let categories = state.session.catalog().categories();
        if categories.is_empty() {
            return None;
        }
        let active = &state.session.filter().active_category;
        let current = categories
            .iter()
            .position(|c| &c.id == active)
            .unwrap_or(0) as isize;
        let len = categories.len() as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        Some(categories[next].id.clone())
    }

    /// Category id for the 1-based digit shown on its tab.
    pub fn by_digit(state: &AppState, digit: u32) -> Option<String> {
        let idx = (digit as usize).checked_sub(1)?;
        state
            .session
            .catalog()
            .categories()
            .get(idx)
            .map(|c| c.id.clone())
    }
}

impl Component for CategoryBar {
    fn id(&self) -> ComponentId {
        ComponentId::CategoryBar
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.hits.is_empty() {
                    self.layout(state);
                }
                let col = event.column.saturating_sub(area.x);
                self.hits
                    .iter()
                    .find(|(range, _)| range.contains(&col))
                    .map(|(_, id)| vec![Action::SetCategory(id.clone())])
                    .unwrap_or_default()
            }
            MouseEventKind::ScrollUp => vec![Action::CycleCategory(-1)],
            MouseEventKind::ScrollDown => vec![Action::CycleCategory(1)],
            _ => vec![],
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        let p = &state.palette;
        self.layout(state);

        let active = &state.session.filter().active_category;
        let mut spans = Vec::new();
        for (pos, category) in state.session.catalog().categories().iter().enumerate() {
            let label = Self::tab_label(pos, &category.name);
            let style = if &category.id == active {
                Style::default()
                    .fg(p.bg)
                    .bg(p.category)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.secondary)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(p.bg)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use tv_core::{Catalog, Session};

    fn state() -> AppState {
        AppState::new(Session::new(Arc::new(Catalog::builtin())), true)
    }

    #[test]
    fn click_picks_the_tab_under_the_cursor() {
        let state = state();
        let mut bar = CategoryBar::new();
        let area = Rect::new(0, 1, 100, 1);
        // " 1 Todos " occupies columns 0..9, the gap is column 9.
        let click = |column| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            bar.handle_mouse(click(3), area, &state),
            vec![Action::SetCategory("all".into())]
        );
        assert!(bar.handle_mouse(click(9), area, &state).is_empty());
        assert_eq!(
            bar.handle_mouse(click(11), area, &state),
            vec![Action::SetCategory("sports".into())]
        );
    }

    #[test]
    fn cycling_wraps_and_digits_are_one_based() {
        let state = state();
        assert_eq!(CategoryBar::cycled(&state, 1).as_deref(), Some("sports"));
        assert_eq!(
            CategoryBar::cycled(&state, -1).as_deref(),
            Some("documentaries")
        );
        assert_eq!(CategoryBar::by_digit(&state, 1).as_deref(), Some("all"));
        assert_eq!(CategoryBar::by_digit(&state, 2).as_deref(), Some("sports"));
        assert_eq!(CategoryBar::by_digit(&state, 0), None);
        assert_eq!(CategoryBar::by_digit(&state, 9), None);
    }
}
