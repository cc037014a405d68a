//! Status bar — bottom line with mode and keybindings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Filter,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Filter => "SEARCH",
        }
    }
}

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    watching: bool,
    palette: &Palette,
) {
    let (label, label_color) = match mode {
        InputMode::Filter => (mode.label(), palette.filter_fg),
        InputMode::Normal if watching => ("WATCH", palette.ready),
        InputMode::Normal => ("BROWSE", palette.secondary),
    };

    let keys = match mode {
        InputMode::Normal if watching => {
            " Esc back  f favorite  o open externally  y copy url  ↑↓ Enter switch  t theme  ? help  q quit"
        }
        InputMode::Normal => {
            " ↑↓/jk move  Enter watch  f favorite  o open externally  / search  [ ] category  Tab panes  t theme  ? help  q quit"
        }
        InputMode::Filter => " type to search  ↑↓ move  Enter keep  Esc clear+close",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default().fg(label_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(keys, palette.style_muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
