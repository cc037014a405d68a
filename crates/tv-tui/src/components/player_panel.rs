//! PlayerPanel component — the "embedded surface" for the active channel.
//!
//! While the selection is Loading it shows a spinner; once Ready it shows the
//! channel's URL, which is the opaque resource the terminal stands in for.

use std::ops::Range;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tv_core::{Channel, Display};
use unicode_width::UnicodeWidthStr;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    widgets::pane_chrome::{pane_chrome, Badge},
};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Button {
    Back,
    Favorite,
    Open,
    Copy,
}

impl Button {
    const ALL: [Button; 4] = [Button::Back, Button::Favorite, Button::Open, Button::Copy];

    fn label(self, favorite: bool) -> &'static str {
        match self {
            Button::Back => " ← back ",
            Button::Favorite if favorite => " ★ favorite ",
            Button::Favorite => " ☆ favorite ",
            Button::Open => " ↗ open ",
            Button::Copy => " ⧉ copy url ",
        }
    }

    fn action(self, channel: &Channel) -> Action {
        match self {
            Button::Back => Action::BackToList,
            Button::Favorite => Action::ToggleFavorite(channel.id.clone()),
            Button::Open => Action::OpenExternal(channel.id.clone()),
            Button::Copy => Action::CopyUrl(channel.url.clone()),
        }
    }
}

/// Column ranges of the button row, relative to its left edge.
fn button_ranges(favorite: bool) -> Vec<(Range<u16>, Button)> {
    let mut x = 0u16;
    Button::ALL
        .iter()
        .map(|&b| {
            let w = b.label(favorite).width() as u16;
            let range = x..x + w;
            x += w + 1;
            (range, b)
        })
        .collect()
}

pub struct PlayerPanel;

impl PlayerPanel {
    pub fn new() -> Self {
        Self
    }

    fn active<'a>(state: &'a AppState) -> Option<&'a Channel> {
        state.session.active_channel()
    }
}

impl Component for PlayerPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Player
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        let Some(channel) = Self::active(state) else {
            return vec![];
        };
        let button = match key.code {
            KeyCode::Esc | KeyCode::Backspace => Button::Back,
            KeyCode::Char('f') | KeyCode::Char('*') => Button::Favorite,
            KeyCode::Char('o') => Button::Open,
            KeyCode::Char('y') => Button::Copy,
            _ => return vec![],
        };
        vec![button.action(channel)]
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, state: &AppState) -> Vec<Action> {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return vec![];
        }
        let Some(channel) = Self::active(state) else {
            return vec![];
        };
        // Buttons sit on the last inner row.
        let button_row = area.y + area.height.saturating_sub(2);
        if event.row != button_row || event.column < area.x + 2 {
            return vec![];
        }
        let col = event.column - area.x - 2;
        button_ranges(state.session.is_favorite(&channel.id))
            .into_iter()
            .find(|(range, _)| range.contains(&col))
            .map(|(_, b)| vec![b.action(channel)])
            .unwrap_or_default()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let p = &state.palette;
        let (channel, ready) = match state.session.display() {
            Display::List => return,
            Display::Loading(ch) => (ch, false),
            Display::Ready(ch) => (ch, true),
        };

        let badge = if ready {
            Badge {
                text: "LIVE",
                color: p.ready,
            }
        } else {
            Badge {
                text: "LOADING",
                color: p.loading,
            }
        };
        let block = pane_chrome("watching", Some('1'), focused, Some(badge), p);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let title = Line::from(vec![
            Span::styled(
                format!(" {}", channel.name),
                Style::default().fg(p.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(
                state.category_name(&channel.category).to_string(),
                Style::default().fg(p.category),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), rows[0]);

        let surface = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.panel_border));
        let body: Vec<Line> = if ready {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", channel.url),
                    Style::default().fg(p.ready).add_modifier(Modifier::UNDERLINED),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  press o to open this stream in your browser",
                    p.style_muted(),
                )),
            ]
        } else {
            let frame_idx = state.spinner_frame % SPINNER.len();
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        format!("  {} ", SPINNER[frame_idx]),
                        Style::default().fg(p.loading),
                    ),
                    Span::styled("tuning in…", Style::default().fg(p.loading)),
                ]),
            ]
        };
        frame.render_widget(
            Paragraph::new(body).block(surface).wrap(Wrap { trim: false }),
            rows[1],
        );

        let favorite = state.session.is_favorite(&channel.id);
        let mut spans = vec![Span::raw(" ")];
        for (_, b) in button_ranges(favorite) {
            let style = match b {
                Button::Favorite if favorite => Style::default().fg(p.bg).bg(p.stars),
                _ => Style::default().fg(p.primary).bg(p.selection_bg),
            };
            spans.push(Span::styled(b.label(favorite), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[2]);
    }
}
