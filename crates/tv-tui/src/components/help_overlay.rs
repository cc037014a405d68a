//! HelpOverlay component — centered popup with keyboard shortcut reference.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::Palette,
};

pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Component for HelpOverlay {
    fn id(&self) -> ComponentId {
        ComponentId::HelpOverlay
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release || !self.visible {
            return vec![];
        }
        match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => vec![Action::ToggleHelp],
            // Consume all keys while overlay is open
            _ => vec![Action::Noop],
        }
    }

    fn handle_mouse(&mut self, _event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        if self.visible {
            vec![Action::ToggleHelp]
        } else {
            vec![]
        }
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        if let Action::ToggleHelp = action {
            self.toggle();
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        if !self.visible {
            return;
        }
        let p = &state.palette;
        let popup = centered_rect(64, 30, area);
        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default().fg(p.muted).add_modifier(Modifier::BOLD),
            ))
        };

        let help_lines: Vec<Line> = vec![
            Line::from(Span::styled(
                " keyboard shortcuts",
                Style::default().fg(p.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            section(" channels"),
            help_row("enter / click", "watch selected channel", p),
            help_row("f / * / click ★", "toggle favorite", p),
            help_row("o", "open channel in browser", p),
            help_row("y", "copy channel url", p),
            help_row("esc / backspace", "back to list (while watching)", p),
            Line::from(""),
            section(" filtering"),
            help_row("/", "search by name (Esc clears + closes)", p),
            help_row("[ / ]  ← / →", "previous / next category", p),
            help_row("1 … 9", "jump to category tab", p),
            help_row("a", "show all channels", p),
            Line::from(""),
            section(" navigation"),
            help_row("↑ / ↓  or  j / k", "move selection", p),
            help_row("home / end  g / G", "jump first / last", p),
            help_row("tab / shift-tab", "focus next / previous pane", p),
            Line::from(""),
            section(" ui"),
            help_row("t", "toggle dark / light theme", p),
            help_row("K", "toggle keys bar", p),
            help_row("?", "toggle this help overlay", p),
            help_row("q / Ctrl+C", "quit", p),
            Line::from(""),
            Line::from(Span::styled(
                " press ? or esc to close",
                p.style_muted(),
            )),
        ];

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(help_lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(p.panel_border))
                        .style(Style::default().bg(p.bg)),
                )
                .wrap(Wrap { trim: false }),
            popup,
        );
    }
}

fn help_row<'a>(key: &'a str, desc: &'a str, p: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{:<20}", key),
            Style::default().fg(p.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(p.secondary)),
    ])
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
