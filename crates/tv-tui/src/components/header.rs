//! Header component — one-row top bar.
//!
//! Left: app title (click = back to list), active category, search term and
//! the channel being watched. Right: theme indicator (click = toggle theme).
//!
//! Not focusable.

use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tv_core::Display;
use unicode_width::UnicodeWidthStr;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
};

const TITLE: &str = " ▣ livetv ";

fn theme_label(dark: bool) -> &'static str {
    if dark {
        " ◐ dark "
    } else {
        " ◑ light "
    }
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Header {
    fn id(&self) -> ComponentId {
        ComponentId::Header
    }

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action> {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return vec![];
        }
        let col = event.column.saturating_sub(area.x);
        if col < TITLE.width() as u16 {
            return vec![Action::BackToList];
        }
        let theme_w = theme_label(state.dark_mode).width() as u16;
        if col >= area.width.saturating_sub(theme_w) {
            return vec![Action::ToggleTheme];
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        let p = &state.palette;
        let sep = || Span::styled(" │ ", Style::default().fg(p.separator));

        let mut spans = vec![
            Span::styled(
                TITLE,
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ),
            sep(),
            Span::styled(
                state.active_category_name().to_string(),
                Style::default().fg(p.category),
            ),
        ];

        let search = &state.session.filter().search_term;
        if !search.is_empty() {
            spans.push(sep());
            spans.push(Span::styled(
                format!("/{}", search),
                Style::default().fg(p.filter_fg),
            ));
        }

        match state.session.display() {
            Display::List => {}
            Display::Loading(ch) => {
                spans.push(sep());
                spans.push(Span::styled("⋯ ", Style::default().fg(p.loading)));
                spans.push(Span::styled(ch.name.clone(), Style::default().fg(p.loading)));
            }
            Display::Ready(ch) => {
                spans.push(sep());
                spans.push(Span::styled("▶ ", Style::default().fg(p.ready)));
                spans.push(Span::styled(
                    ch.name.clone(),
                    Style::default().fg(p.ready).add_modifier(Modifier::BOLD),
                ));
            }
        }

        let theme = theme_label(state.dark_mode);
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = (area.width as usize).saturating_sub(used + theme.width());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(theme, p.style_muted()));

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

    fn click(column: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn title_goes_back_and_theme_label_toggles() {
        let state = AppState::new(Session::new(Arc::new(Catalog::builtin())), true);
        let mut header = Header::new();
        let area = Rect::new(0, 0, 80, 1);
        assert_eq!(
            header.handle_mouse(click(2), area, &state),
            vec![Action::BackToList]
        );
        assert_eq!(
            header.handle_mouse(click(78), area, &state),
            vec![Action::ToggleTheme]
        );
        assert!(header.handle_mouse(click(40), area, &state).is_empty());
    }
}
