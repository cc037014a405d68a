//! Shelves component — the favorites and recently-watched views, stacked.
//!
//! Both are recomputed from the session on every draw/event; only the cursor
//! lives here.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};
use tv_core::Channel;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    widgets::{pane_chrome::pane_chrome, scrollable_list::ScrollableList},
};

enum Row<'a> {
    Heading(&'static str),
    Placeholder(&'static str),
    Channel { channel: &'a Channel, recent: bool },
    Blank,
}

fn rows(state: &AppState) -> Vec<Row<'_>> {
    let favorites = state.session.favorites_view();
    let recent = state.session.recent_view();

    let mut rows = vec![Row::Heading("★ favorites")];
    if favorites.is_empty() {
        rows.push(Row::Placeholder("press f on a channel to pin it here"));
    }
    rows.extend(favorites.into_iter().map(|channel| Row::Channel {
        channel,
        recent: false,
    }));
    rows.push(Row::Blank);
    rows.push(Row::Heading("↺ recently watched"));
    if recent.is_empty() {
        rows.push(Row::Placeholder("nothing watched yet"));
    }
    rows.extend(recent.into_iter().map(|channel| Row::Channel {
        channel,
        recent: true,
    }));
    rows
}

/// Row positions of the selectable entries.
fn selectable(rows: &[Row<'_>]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, r)| matches!(r, Row::Channel { .. }))
        .map(|(i, _)| i)
        .collect()
}

pub struct Shelves {
    pub list: ScrollableList,
    scroll: usize,
}

impl Shelves {
    pub fn new() -> Self {
        Self {
            list: ScrollableList::new(),
            scroll: 0,
        }
    }

    fn selected_channel<'a>(&mut self, state: &'a AppState) -> Option<&'a Channel> {
        let rows = rows(state);
        let picks = selectable(&rows);
        self.list.set_len(picks.len());
        let pos = *picks.get(self.list.selected()?)?;
        match rows.get(pos) {
            Some(Row::Channel { channel, .. }) => Some(*channel),
            _ => None,
        }
    }

    fn keep_visible(&mut self, sel_row: usize, height: usize) {
        if height == 0 {
            return;
        }
        if sel_row < self.scroll {
            self.scroll = sel_row;
        } else if sel_row >= self.scroll + height {
            self.scroll = sel_row + 1 - height;
        }
    }
}

impl Component for Shelves {
    fn id(&self) -> ComponentId {
        ComponentId::Shelves
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        let len = selectable(&rows(state)).len();
        self.list.set_len(len);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_down(1),
            KeyCode::Home | KeyCode::Char('g') => self.list.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.list.select_last(),
            KeyCode::Enter => {
                if let Some(ch) = self.selected_channel(state) {
                    return vec![Action::SelectChannel(ch.id.clone())];
                }
            }
            KeyCode::Char('f') | KeyCode::Char('*') => {
                if let Some(ch) = self.selected_channel(state) {
                    return vec![Action::ToggleFavorite(ch.id.clone())];
                }
            }
            KeyCode::Char('o') => {
                if let Some(ch) = self.selected_channel(state) {
                    return vec![Action::OpenExternal(ch.id.clone())];
                }
            }
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::ScrollUp => self.list.select_up(1),
            MouseEventKind::ScrollDown => self.list.select_down(1),
            MouseEventKind::Down(MouseButton::Left) => {
                if event.row <= area.y {
                    return vec![];
                }
                let row = self.scroll + (event.row - area.y - 1) as usize;
                let rows = rows(state);
                let picks = selectable(&rows);
                self.list.set_len(picks.len());
                if let Some(Row::Channel { channel, .. }) = rows.get(row) {
                    if let Some(pick) = picks.iter().position(|&p| p == row) {
                        self.list.select(pick);
                    }
                    return vec![Action::SelectChannel(channel.id.clone())];
                }
            }
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let p = &state.palette;
        let block = pane_chrome("shelves", Some('2'), focused, None, p);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = rows(state);
        let picks = selectable(&rows);
        self.list.set_len(picks.len());
        let sel_row = self.list.selected().and_then(|i| picks.get(i).copied());
        if let Some(r) = sel_row {
            self.keep_visible(r, inner.height as usize);
        }

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(|(i, row)| match row {
                Row::Heading(text) => ListItem::new(Line::from(Span::styled(
                    format!(" {}", text),
                    Style::default().fg(p.muted).add_modifier(Modifier::BOLD),
                ))),
                Row::Placeholder(text) => ListItem::new(Line::from(Span::styled(
                    format!("   {}", text),
                    p.style_muted(),
                ))),
                Row::Blank => ListItem::new(Line::from("")),
                Row::Channel { channel, recent } => {
                    let is_selected = focused && sel_row == Some(i);
                    let bullet = if *recent {
                        Span::styled("   ↺ ", Style::default().fg(p.recent))
                    } else {
                        Span::styled("   ★ ", Style::default().fg(p.stars))
                    };
                    let name_style = if is_selected {
                        Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(p.secondary)
                    };
                    let item = ListItem::new(Line::from(vec![
                        bullet,
                        Span::styled(channel.name.clone(), name_style),
                    ]));
                    if is_selected {
                        item.style(Style::default().bg(p.selection_bg))
                    } else {
                        item
                    }
                }
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use tv_core::{Catalog, Session};

    fn state() -> AppState {
        let mut session = Session::new(Arc::new(Catalog::builtin()));
        session.toggle_favorite("sportv");
        session.toggle_favorite("espn");
        session.select_channel("history");
        AppState::new(session, true)
    }

    #[test]
    fn cursor_walks_favorites_then_recent() {
        let state = state();
        let mut shelves = Shelves::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);

        // Favorites in catalog order: espn before sportv.
        assert_eq!(
            shelves.handle_key(enter, &state),
            vec![Action::SelectChannel("espn".into())]
        );
        shelves.handle_key(down, &state);
        shelves.handle_key(down, &state);
        assert_eq!(
            shelves.handle_key(enter, &state),
            vec![Action::SelectChannel("history".into())]
        );
    }

    #[test]
    fn click_on_heading_does_nothing() {
        let state = state();
        let mut shelves = Shelves::new();
        let area = Rect::new(40, 2, 30, 12);
        let click = |row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 45,
            row,
            modifiers: KeyModifiers::NONE,
        };
        assert!(shelves.handle_mouse(click(3), area, &state).is_empty());
        assert_eq!(
            shelves.handle_mouse(click(5), area, &state),
            vec![Action::SelectChannel("sportv".into())]
        );
        assert_eq!(shelves.list.selected(), Some(1));
    }
}
