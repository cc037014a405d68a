//! ChannelList component — the organized channel list.
//!
//! Shown as the main pane while browsing, and as the "other channels" side
//! list while a channel is being watched. Row layout:
//!
//! ```text
//!  ★ ↺ ▶ Channel name          Category
//!  └─┴─ star column (click toggles favorite, never selects)
//! ```

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use tv_core::{Channel, ALL_CATEGORY};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    widgets::{
        filter_input::{FilterAction, FilterInput},
        pane_chrome::{pane_chrome, Badge},
        scrollable_list::ScrollableList,
    },
};

/// Width of the leading star column, in cells.
const STAR_COLUMN: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListMode {
    /// Full organizer output.
    Organized,
    /// Organizer output minus the active channel.
    Others,
}

pub struct ChannelList {
    pub list: ScrollableList,
    filter_input: FilterInput,
    mode: ListMode,
}

impl ChannelList {
    pub fn new() -> Self {
        Self {
            list: ScrollableList::new(),
            filter_input: FilterInput::new("search channels…"),
            mode: ListMode::Organized,
        }
    }

    pub fn set_mode(&mut self, mode: ListMode) {
        if self.mode != mode {
            self.mode = mode;
            self.list.select_first();
        }
    }

    #[cfg(test)]
    pub fn is_filter_active(&self) -> bool {
        self.filter_input.is_active()
    }

    fn channels<'a>(&self, state: &'a AppState) -> Vec<&'a Channel> {
        match self.mode {
            ListMode::Organized => state.session.organized(),
            ListMode::Others => state.session.other_channels(),
        }
    }

    fn content_height(&self, area: Rect) -> u16 {
        let inner = area.height.saturating_sub(2);
        if self.filter_input.is_active() {
            inner.saturating_sub(1)
        } else {
            inner
        }
    }

    fn render_item<'a>(
        &self,
        channel: &'a Channel,
        is_selected: bool,
        width: usize,
        state: &'a AppState,
    ) -> ListItem<'a> {
        let p = &state.palette;
        let session = &state.session;
        let is_fav = session.is_favorite(&channel.id);
        let is_recent = session
            .preferences()
            .recently_watched
            .contains(&channel.id);
        let is_active = session.selection().active_id() == Some(channel.id.as_str());

        let star = if is_fav { " ★ " } else { " ☆ " };
        let star_style = if is_fav {
            Style::default().fg(p.stars)
        } else {
            p.style_muted()
        };
        let recent = if is_recent { "↺ " } else { "  " };
        let (marker, marker_style) = if is_active {
            let color = if session.selection().is_loading() {
                p.loading
            } else {
                p.ready
            };
            ("▶ ", Style::default().fg(color))
        } else {
            ("  ", Style::default())
        };

        let name_style = if is_selected || is_active {
            Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.secondary)
        };

        let category = state.category_name(&channel.category);
        let fixed = STAR_COLUMN as usize + 4 + 2 + category.width();
        let name_w = width.saturating_sub(fixed).max(1);
        let name = truncate(&channel.name, name_w);
        let pad = name_w.saturating_sub(name.width());

        let spans = vec![
            Span::styled(star, star_style),
            Span::styled(recent, Style::default().fg(p.recent)),
            Span::styled(marker, marker_style),
            Span::styled(name, name_style),
            Span::raw(" ".repeat(pad + 2)),
            Span::styled(category, Style::default().fg(p.category)),
        ];

        let item_bg = if is_selected {
            Style::default().bg(p.selection_bg)
        } else {
            Style::default()
        };
        ListItem::new(Line::from(spans)).style(item_bg)
    }

    fn draw_empty(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let p = &state.palette;
        let mut lines = vec![Line::from(Span::styled(
            "  No channels found",
            Style::default().fg(p.secondary),
        ))];
        if state.session.filter().active_category != ALL_CATEGORY {
            lines.push(Line::from(vec![
                Span::styled("  press ", p.style_muted()),
                Span::styled("a", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
                Span::styled(" to show all channels", p.style_muted()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut w = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if w + cw + 1 > max {
            break;
        }
        out.push(c);
        w += cw;
    }
    out.push('…');
    out
}

impl Component for ChannelList {
    fn id(&self) -> ComponentId {
        ComponentId::ChannelList
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        if self.filter_input.is_active() {
            match key.code {
                KeyCode::Up => {
                    self.list.select_up(1);
                    return vec![];
                }
                KeyCode::Down => {
                    self.list.select_down(1);
                    return vec![];
                }
                _ => {}
            }
            return match self.filter_input.handle_key(key) {
                FilterAction::Changed(q) => {
                    self.list.select_first();
                    vec![Action::SearchChanged(q)]
                }
                FilterAction::Confirmed | FilterAction::Cancelled => vec![Action::CloseFilter],
            };
        }

        let channels = self.channels(state);
        self.list.set_len(channels.len());
        let selected = self.list.selected().and_then(|i| channels.get(i).copied());

        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            5
        } else {
            1
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_up(step),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_down(step),
            KeyCode::PageUp => self.list.select_up(10),
            KeyCode::PageDown => self.list.select_down(10),
            KeyCode::Home | KeyCode::Char('g') => self.list.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.list.select_last(),

            KeyCode::Enter => {
                if let Some(ch) = selected {
                    return vec![Action::SelectChannel(ch.id.clone())];
                }
            }
            KeyCode::Char('f') | KeyCode::Char('*') => {
                if let Some(ch) = selected {
                    return vec![Action::ToggleFavorite(ch.id.clone())];
                }
            }
            KeyCode::Char('o') => {
                if let Some(ch) = selected {
                    return vec![Action::OpenExternal(ch.id.clone())];
                }
            }
            KeyCode::Char('y') => {
                if let Some(ch) = selected {
                    return vec![Action::CopyUrl(ch.url.clone())];
                }
            }
            KeyCode::Char('/') => {
                self.filter_input.activate();
                return vec![Action::OpenFilter];
            }
            KeyCode::Esc | KeyCode::Backspace if self.mode == ListMode::Others => {
                return vec![Action::BackToList];
            }
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action> {
        let channels = self.channels(state);
        self.list.set_len(channels.len());

        match event.kind {
            MouseEventKind::ScrollUp => self.list.select_up(1),
            MouseEventKind::ScrollDown => self.list.select_down(1),
            MouseEventKind::Down(MouseButton::Left) => {
                if event.row <= area.y || event.column <= area.x {
                    return vec![];
                }
                let rel_row = (event.row - area.y - 1) as usize;
                let rel_col = event.column - area.x - 1;

                if channels.is_empty() {
                    // Second line of the empty state is the "show all" prompt.
                    if rel_row == 1 && state.session.filter().active_category != ALL_CATEGORY {
                        return vec![Action::ResetCategory];
                    }
                    return vec![];
                }
                if rel_row >= self.content_height(area) as usize {
                    return vec![];
                }

                let target = self.list.scroll_offset + rel_row;
                let Some(ch) = channels.get(target) else {
                    return vec![];
                };
                if rel_col < STAR_COLUMN {
                    // Toggling a favorite must not also select the row's channel.
                    return vec![Action::ToggleFavorite(ch.id.clone())];
                }
                self.list.handle_click(rel_row);
                return vec![Action::SelectChannel(ch.id.clone())];
            }
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, action: &Action, state: &AppState) -> Vec<Action> {
        match action {
            Action::CloseFilter => self.filter_input.deactivate(),
            Action::OpenFilter => {
                if !self.filter_input.is_active() {
                    self.filter_input.activate();
                }
            }
            Action::SetCategory(_) | Action::ResetCategory | Action::CycleCategory(_) => {
                self.list.select_first();
            }
            _ => {}
        }
        let len = self.channels(state).len();
        self.list.set_len(len);
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let channels = self.channels(state);
        self.list.set_len(channels.len());

        let title = match self.mode {
            ListMode::Organized => "channels",
            ListMode::Others => "other channels",
        };
        let count = channels.len().to_string();
        let badge = Badge {
            text: &count,
            color: state.palette.muted,
        };
        let block = pane_chrome(title, Some('1'), focused, Some(badge), &state.palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_h = self.content_height(area);
        let content = Rect {
            height: content_h,
            ..inner
        };

        if channels.is_empty() {
            self.draw_empty(frame, content, state);
        } else {
            let height = content_h as usize;
            self.list.ensure_visible(height);
            let sel_in_view = self.list.selected_in_view(height);
            let width = inner.width as usize;
            let items: Vec<ListItem> = self
                .list
                .visible_range(height)
                .enumerate()
                .map(|(row, idx)| self.render_item(channels[idx], row == sel_in_view, width, state))
                .collect();
            frame.render_widget(List::new(items), content);
        }

        if self.filter_input.is_active() {
            let filter_area = Rect {
                y: inner.y + inner.height.saturating_sub(1),
                height: 1,
                ..inner
            };
            self.filter_input.draw(frame, filter_area, &state.palette);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tv_core::{Catalog, Session};

    fn state() -> AppState {
        AppState::new(Session::new(Arc::new(Catalog::builtin())), true)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 2,
        width: 60,
        height: 12,
    };

    #[test]
    fn star_column_click_toggles_favorite_without_selecting() {
        let state = state();
        let mut list = ChannelList::new();
        // First content row is y=3; alphabetically "Discovery Channel" leads.
        let actions = list.handle_mouse(click(2, 3), AREA, &state);
        assert_eq!(actions, vec![Action::ToggleFavorite("discovery".into())]);
        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::SelectChannel(_))));
    }

    #[test]
    fn name_click_selects_channel() {
        let state = state();
        let mut list = ChannelList::new();
        let actions = list.handle_mouse(click(20, 4), AREA, &state);
        assert_eq!(actions, vec![Action::SelectChannel("espn".into())]);
        assert_eq!(list.list.selected(), Some(1));
    }

    #[test]
    fn keys_map_to_channel_actions() {
        let state = state();
        let mut list = ChannelList::new();
        list.handle_key(key(KeyCode::Down), &state);
        assert_eq!(
            list.handle_key(key(KeyCode::Enter), &state),
            vec![Action::SelectChannel("espn".into())]
        );
        assert_eq!(
            list.handle_key(key(KeyCode::Char('f')), &state),
            vec![Action::ToggleFavorite("espn".into())]
        );
        assert_eq!(
            list.handle_key(key(KeyCode::Char('o')), &state),
            vec![Action::OpenExternal("espn".into())]
        );
        assert_eq!(
            list.handle_key(key(KeyCode::Char('y')), &state),
            vec![Action::CopyUrl("https://embedcanaistv.com/espn/".into())]
        );
    }

    #[test]
    fn search_input_emits_changes_and_closes() {
        let state = state();
        let mut list = ChannelList::new();
        assert_eq!(
            list.handle_key(key(KeyCode::Char('/')), &state),
            vec![Action::OpenFilter]
        );
        assert!(list.is_filter_active());
        assert_eq!(
            list.handle_key(key(KeyCode::Char('h')), &state),
            vec![Action::SearchChanged("h".into())]
        );
        assert_eq!(
            list.handle_key(key(KeyCode::Enter), &state),
            vec![Action::CloseFilter]
        );
        assert!(!list.is_filter_active());
    }

    #[test]
    fn empty_state_prompt_resets_category() {
        let mut state = state();
        state.session.set_category("news");
        let mut list = ChannelList::new();
        let actions = list.handle_mouse(click(10, 4), AREA, &state);
        assert_eq!(actions, vec![Action::ResetCategory]);
    }

    #[test]
    fn others_mode_hides_active_channel() {
        let mut state = state();
        state.session.select_channel("discovery");
        let mut list = ChannelList::new();
        list.set_mode(ListMode::Others);
        assert_eq!(
            list.handle_key(key(KeyCode::Enter), &state),
            vec![Action::SelectChannel("espn".into())]
        );
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("Discovery Channel", 50), "Discovery Channel");
        assert_eq!(truncate("Discovery Channel", 6), "Disco…");
    }
}
